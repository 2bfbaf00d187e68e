use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{
    Account, Booking, BookingStatus, Faq, IndividualTest, NewBooking, NewFaq, NewIndividualTest,
    NewReport, NewTestPackage, NewTestimonial, PaymentStatus, Report, TestPackage, TestType,
    Testimonial, UpdateBooking,
};

// ── Accounts ──

pub fn insert_account(conn: &Connection, username: &str, password: &str) -> anyhow::Result<Account> {
    conn.execute(
        "INSERT INTO users (username, password) VALUES (?1, ?2)",
        params![username, password],
    )?;
    Ok(Account {
        id: conn.last_insert_rowid(),
        username: username.to_string(),
        password: password.to_string(),
    })
}

pub fn get_account(conn: &Connection, id: i64) -> anyhow::Result<Option<Account>> {
    let result = conn.query_row(
        "SELECT id, username, password FROM users WHERE id = ?1",
        params![id],
        |row| {
            Ok(Account {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
            })
        },
    );

    match result {
        Ok(account) => Ok(Some(account)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_account_by_username(
    conn: &Connection,
    username: &str,
) -> anyhow::Result<Option<Account>> {
    let result = conn.query_row(
        "SELECT id, username, password FROM users WHERE username = ?1",
        params![username],
        |row| {
            Ok(Account {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
            })
        },
    );

    match result {
        Ok(account) => Ok(Some(account)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Test Packages ──

pub fn insert_test_package(
    conn: &Connection,
    new: &NewTestPackage,
) -> anyhow::Result<TestPackage> {
    let now = Utc::now().naive_utc();
    let pkg = TestPackage {
        id: uuid::Uuid::new_v4().to_string(),
        name: new.name.clone(),
        description: new.description.clone(),
        price: new.price,
        original_price: new.original_price,
        tests: new.tests.clone(),
        category: new.category.clone(),
        popular: new.popular,
        home_collection: new.home_collection,
        created_at: now,
        updated_at: now,
    };

    let tests_json = serde_json::to_string(&pkg.tests)?;
    let stamp = now.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO test_packages (id, name, description, price, original_price, tests, category, popular, home_collection, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            pkg.id,
            pkg.name,
            pkg.description,
            pkg.price,
            pkg.original_price,
            tests_json,
            pkg.category,
            pkg.popular as i32,
            pkg.home_collection as i32,
            stamp,
            stamp,
        ],
    )?;
    Ok(pkg)
}

pub fn list_test_packages(conn: &Connection) -> anyhow::Result<Vec<TestPackage>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, price, original_price, tests, category, popular, home_collection, created_at, updated_at
         FROM test_packages ORDER BY popular DESC, created_at DESC",
    )?;
    let rows = stmt.query_map([], |row| Ok(parse_package_row(row)))?;

    let mut packages = vec![];
    for row in rows {
        packages.push(row??);
    }
    Ok(packages)
}

pub fn get_test_package(conn: &Connection, id: &str) -> anyhow::Result<Option<TestPackage>> {
    let result = conn.query_row(
        "SELECT id, name, description, price, original_price, tests, category, popular, home_collection, created_at, updated_at
         FROM test_packages WHERE id = ?1",
        params![id],
        |row| Ok(parse_package_row(row)),
    );

    match result {
        Ok(pkg) => Ok(Some(pkg?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_package_row(row: &rusqlite::Row) -> anyhow::Result<TestPackage> {
    let tests_json: String = row.get(5)?;

    Ok(TestPackage {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        original_price: row.get(4)?,
        tests: serde_json::from_str(&tests_json).unwrap_or_default(),
        category: row.get(6)?,
        popular: row.get::<_, i32>(7)? != 0,
        home_collection: row.get::<_, i32>(8)? != 0,
        created_at: parse_timestamp(&row.get::<_, String>(9)?),
        updated_at: parse_timestamp(&row.get::<_, String>(10)?),
    })
}

// ── Individual Tests ──

pub fn insert_individual_test(
    conn: &Connection,
    new: &NewIndividualTest,
) -> anyhow::Result<IndividualTest> {
    let now = Utc::now().naive_utc();
    let test = IndividualTest {
        id: uuid::Uuid::new_v4().to_string(),
        name: new.name.clone(),
        description: new.description.clone(),
        price: new.price,
        category: new.category.clone(),
        symptoms: new.symptoms.clone(),
        preparation_required: new.preparation_required,
        report_time: new.report_time.clone(),
        home_collection: new.home_collection,
        created_at: now,
        updated_at: now,
    };

    let symptoms_json = serde_json::to_string(&test.symptoms)?;
    let stamp = now.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO individual_tests (id, name, description, price, category, symptoms, preparation_required, report_time, home_collection, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            test.id,
            test.name,
            test.description,
            test.price,
            test.category,
            symptoms_json,
            test.preparation_required as i32,
            test.report_time,
            test.home_collection as i32,
            stamp,
            stamp,
        ],
    )?;
    Ok(test)
}

pub fn list_individual_tests(conn: &Connection) -> anyhow::Result<Vec<IndividualTest>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, price, category, symptoms, preparation_required, report_time, home_collection, created_at, updated_at
         FROM individual_tests ORDER BY category ASC, name ASC",
    )?;
    let rows = stmt.query_map([], |row| Ok(parse_test_row(row)))?;

    let mut tests = vec![];
    for row in rows {
        tests.push(row??);
    }
    Ok(tests)
}

pub fn get_individual_test(conn: &Connection, id: &str) -> anyhow::Result<Option<IndividualTest>> {
    let result = conn.query_row(
        "SELECT id, name, description, price, category, symptoms, preparation_required, report_time, home_collection, created_at, updated_at
         FROM individual_tests WHERE id = ?1",
        params![id],
        |row| Ok(parse_test_row(row)),
    );

    match result {
        Ok(test) => Ok(Some(test?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_test_row(row: &rusqlite::Row) -> anyhow::Result<IndividualTest> {
    let symptoms_json: String = row.get(5)?;

    Ok(IndividualTest {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        category: row.get(4)?,
        symptoms: serde_json::from_str(&symptoms_json).unwrap_or_default(),
        preparation_required: row.get::<_, i32>(6)? != 0,
        report_time: row.get(7)?,
        home_collection: row.get::<_, i32>(8)? != 0,
        created_at: parse_timestamp(&row.get::<_, String>(9)?),
        updated_at: parse_timestamp(&row.get::<_, String>(10)?),
    })
}

// ── Bookings ──

pub fn insert_booking(conn: &Connection, new: &NewBooking) -> anyhow::Result<Booking> {
    let now = Utc::now().naive_utc();
    let booking = Booking {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: new.user_id.clone(),
        test_type: new.test_type,
        test_id: new.test_id.clone(),
        test_name: new.test_name.clone(),
        price: new.price,
        patient_name: new.patient_name.clone(),
        patient_email: new.patient_email.clone(),
        patient_phone: new.patient_phone.clone(),
        patient_address: new.patient_address.clone(),
        collection_date: new.collection_date,
        collection_time: new.collection_time.clone(),
        status: new.status,
        payment_id: new.payment_id.clone(),
        payment_status: new.payment_status,
        created_at: now,
        updated_at: now,
    };

    let stamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
    conn.execute(
        "INSERT INTO bookings (id, user_id, test_type, test_id, test_name, price, patient_name, patient_email, patient_phone, patient_address, collection_date, collection_time, status, payment_id, payment_status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
        params![
            booking.id,
            booking.user_id,
            booking.test_type.as_str(),
            booking.test_id,
            booking.test_name,
            booking.price,
            booking.patient_name,
            booking.patient_email,
            booking.patient_phone,
            booking.patient_address,
            booking.collection_date.format("%Y-%m-%d").to_string(),
            booking.collection_time,
            booking.status.as_str(),
            booking.payment_id,
            booking.payment_status.as_str(),
            stamp,
            stamp,
        ],
    )?;
    Ok(booking)
}

pub fn list_bookings(conn: &Connection) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, test_type, test_id, test_name, price, patient_name, patient_email, patient_phone, patient_address, collection_date, collection_time, status, payment_id, payment_status, created_at, updated_at
         FROM bookings ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map([], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn list_bookings_for_email(conn: &Connection, email: &str) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, test_type, test_id, test_name, price, patient_name, patient_email, patient_phone, patient_address, collection_date, collection_time, status, payment_id, payment_status, created_at, updated_at
         FROM bookings WHERE patient_email = ?1 ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map(params![email], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn get_booking(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, user_id, test_type, test_id, test_name, price, patient_name, patient_email, patient_phone, patient_address, collection_date, collection_time, status, payment_id, payment_status, created_at, updated_at
         FROM bookings WHERE id = ?1",
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Applies only the fields present in `changes`, bumping `updated_at`.
/// Returns `None` when no booking has that id.
pub fn update_booking(
    conn: &Connection,
    id: &str,
    changes: &UpdateBooking,
) -> anyhow::Result<Option<Booking>> {
    let mut booking = match get_booking(conn, id)? {
        Some(b) => b,
        None => return Ok(None),
    };

    if let Some(status) = changes.status {
        booking.status = status;
    }
    if let Some(payment_status) = changes.payment_status {
        booking.payment_status = payment_status;
    }
    if let Some(payment_id) = &changes.payment_id {
        booking.payment_id = Some(payment_id.clone());
    }
    if let Some(date) = changes.collection_date {
        booking.collection_date = date;
    }
    if let Some(time) = &changes.collection_time {
        booking.collection_time = time.clone();
    }
    booking.updated_at = Utc::now().naive_utc();

    conn.execute(
        "UPDATE bookings SET status = ?1, payment_status = ?2, payment_id = ?3, collection_date = ?4, collection_time = ?5, updated_at = ?6
         WHERE id = ?7",
        params![
            booking.status.as_str(),
            booking.payment_status.as_str(),
            booking.payment_id,
            booking.collection_date.format("%Y-%m-%d").to_string(),
            booking.collection_time,
            booking.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            id,
        ],
    )?;
    Ok(Some(booking))
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let test_type_str: String = row.get(2)?;
    let status_str: String = row.get(12)?;
    let payment_status_str: String = row.get(14)?;

    Ok(Booking {
        id: row.get(0)?,
        user_id: row.get(1)?,
        test_type: TestType::parse(&test_type_str),
        test_id: row.get(3)?,
        test_name: row.get(4)?,
        price: row.get(5)?,
        patient_name: row.get(6)?,
        patient_email: row.get(7)?,
        patient_phone: row.get(8)?,
        patient_address: row.get(9)?,
        collection_date: parse_date(&row.get::<_, String>(10)?),
        collection_time: row.get(11)?,
        status: BookingStatus::parse(&status_str),
        payment_id: row.get(13)?,
        payment_status: PaymentStatus::parse(&payment_status_str),
        created_at: parse_timestamp(&row.get::<_, String>(15)?),
        updated_at: parse_timestamp(&row.get::<_, String>(16)?),
    })
}

// ── Testimonials ──

pub fn insert_testimonial(
    conn: &Connection,
    new: &NewTestimonial,
) -> anyhow::Result<Testimonial> {
    let now = Utc::now().naive_utc();
    let testimonial = Testimonial {
        id: uuid::Uuid::new_v4().to_string(),
        name: new.name.clone(),
        location: new.location.clone(),
        rating: new.rating,
        comment: new.comment.clone(),
        approved: new.approved,
        created_at: now,
    };

    conn.execute(
        "INSERT INTO testimonials (id, name, location, rating, comment, approved, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            testimonial.id,
            testimonial.name,
            testimonial.location,
            testimonial.rating,
            testimonial.comment,
            testimonial.approved as i32,
            now.format("%Y-%m-%d %H:%M:%S").to_string(),
        ],
    )?;
    Ok(testimonial)
}

pub fn list_approved_testimonials(conn: &Connection) -> anyhow::Result<Vec<Testimonial>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, location, rating, comment, approved, created_at
         FROM testimonials WHERE approved = 1 ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Testimonial {
            id: row.get(0)?,
            name: row.get(1)?,
            location: row.get(2)?,
            rating: row.get(3)?,
            comment: row.get(4)?,
            approved: row.get::<_, i32>(5)? != 0,
            created_at: parse_timestamp(&row.get::<_, String>(6)?),
        })
    })?;

    let mut testimonials = vec![];
    for row in rows {
        testimonials.push(row?);
    }
    Ok(testimonials)
}

// ── FAQs ──

pub fn insert_faq(conn: &Connection, new: &NewFaq) -> anyhow::Result<Faq> {
    let now = Utc::now().naive_utc();
    let faq = Faq {
        id: uuid::Uuid::new_v4().to_string(),
        question: new.question.clone(),
        answer: new.answer.clone(),
        category: new.category.clone(),
        active: new.active,
        created_at: now,
        updated_at: now,
    };

    let stamp = now.format("%Y-%m-%d %H:%M:%S").to_string();
    conn.execute(
        "INSERT INTO faqs (id, question, answer, category, active, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            faq.id,
            faq.question,
            faq.answer,
            faq.category,
            faq.active as i32,
            stamp,
            stamp,
        ],
    )?;
    Ok(faq)
}

pub fn list_active_faqs(conn: &Connection) -> anyhow::Result<Vec<Faq>> {
    let mut stmt = conn.prepare(
        "SELECT id, question, answer, category, active, created_at, updated_at
         FROM faqs WHERE active = 1 ORDER BY category ASC, created_at ASC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Faq {
            id: row.get(0)?,
            question: row.get(1)?,
            answer: row.get(2)?,
            category: row.get(3)?,
            active: row.get::<_, i32>(4)? != 0,
            created_at: parse_timestamp(&row.get::<_, String>(5)?),
            updated_at: parse_timestamp(&row.get::<_, String>(6)?),
        })
    })?;

    let mut faqs = vec![];
    for row in rows {
        faqs.push(row?);
    }
    Ok(faqs)
}

// ── Reports ──

pub fn insert_report(conn: &Connection, new: &NewReport) -> anyhow::Result<Report> {
    let now = Utc::now().naive_utc();
    let report = Report {
        id: uuid::Uuid::new_v4().to_string(),
        booking_id: new.booking_id.clone(),
        user_id: new.user_id.clone(),
        report_url: new.report_url.clone(),
        report_password: new.report_password.clone(),
        generated_at: now,
        downloaded_at: None,
    };

    conn.execute(
        "INSERT INTO reports (id, booking_id, user_id, report_url, report_password, generated_at, downloaded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)",
        params![
            report.id,
            report.booking_id,
            report.user_id,
            report.report_url,
            report.report_password,
            now.format("%Y-%m-%d %H:%M:%S").to_string(),
        ],
    )?;
    Ok(report)
}

pub fn list_reports(conn: &Connection) -> anyhow::Result<Vec<Report>> {
    let mut stmt = conn.prepare(
        "SELECT id, booking_id, user_id, report_url, report_password, generated_at, downloaded_at
         FROM reports ORDER BY generated_at DESC",
    )?;
    let rows = stmt.query_map([], |row| Ok(parse_report_row(row)))?;

    let mut reports = vec![];
    for row in rows {
        reports.push(row??);
    }
    Ok(reports)
}

pub fn get_report(conn: &Connection, id: &str) -> anyhow::Result<Option<Report>> {
    let result = conn.query_row(
        "SELECT id, booking_id, user_id, report_url, report_password, generated_at, downloaded_at
         FROM reports WHERE id = ?1",
        params![id],
        |row| Ok(parse_report_row(row)),
    );

    match result {
        Ok(report) => Ok(Some(report?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn parse_report_row(row: &rusqlite::Row) -> anyhow::Result<Report> {
    let downloaded_at: Option<String> = row.get(6)?;

    Ok(Report {
        id: row.get(0)?,
        booking_id: row.get(1)?,
        user_id: row.get(2)?,
        report_url: row.get(3)?,
        report_password: row.get(4)?,
        generated_at: parse_timestamp(&row.get::<_, String>(5)?),
        downloaded_at: downloaded_at.map(|s| parse_timestamp(&s)),
    })
}

// ── Parse helpers ──

fn parse_timestamp(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| Utc::now().naive_utc())
}

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|_| Utc::now().date_naive())
}
