//! Embedded catalog content. Served when no backend is reachable so browsing
//! never dead-ends, and used to seed the browsing tables on a fresh install.

use chrono::{NaiveDateTime, Utc};

use crate::models::{
    Faq, IndividualTest, NewFaq, NewIndividualTest, NewTestPackage, NewTestimonial, TestPackage,
    Testimonial,
};

pub fn package_seeds() -> Vec<NewTestPackage> {
    vec![
        NewTestPackage {
            name: "Complete Health Checkup".to_string(),
            description: "Comprehensive health screening with 45+ parameters including CBC, lipid profile, liver function, kidney function, and diabetes screening.".to_string(),
            price: 1499,
            original_price: Some(2500),
            tests: vec![
                "Complete Blood Count".to_string(),
                "Lipid Profile".to_string(),
                "Liver Function Test".to_string(),
                "Kidney Function Test".to_string(),
                "HbA1c".to_string(),
                "Thyroid Profile".to_string(),
            ],
            category: "Health Checkup".to_string(),
            popular: true,
            home_collection: true,
        },
        NewTestPackage {
            name: "Diabetes Care Package".to_string(),
            description: "Essential tests for diabetes monitoring and management including glucose levels, HbA1c, and related parameters.".to_string(),
            price: 899,
            original_price: Some(1200),
            tests: vec![
                "Fasting Glucose".to_string(),
                "HbA1c".to_string(),
                "Post Prandial Glucose".to_string(),
                "Insulin Levels".to_string(),
            ],
            category: "Diabetes".to_string(),
            popular: false,
            home_collection: true,
        },
        NewTestPackage {
            name: "Heart Health Package".to_string(),
            description: "Comprehensive cardiac risk assessment with lipid profile, cardiac markers, and ECG interpretation.".to_string(),
            price: 1299,
            original_price: Some(1800),
            tests: vec![
                "Lipid Profile".to_string(),
                "CRP".to_string(),
                "Troponin-I".to_string(),
                "ECG".to_string(),
                "Homocysteine".to_string(),
            ],
            category: "Cardiac".to_string(),
            popular: true,
            home_collection: true,
        },
        NewTestPackage {
            name: "Women's Health Package".to_string(),
            description: "Specialized health screening for women including hormonal assessment, vitamin levels, and general health parameters.".to_string(),
            price: 1699,
            original_price: Some(2200),
            tests: vec![
                "Complete Blood Count".to_string(),
                "Thyroid Profile".to_string(),
                "Vitamin D".to_string(),
                "Vitamin B12".to_string(),
                "Iron Studies".to_string(),
                "PAP Smear".to_string(),
            ],
            category: "Women's Health".to_string(),
            popular: false,
            home_collection: true,
        },
    ]
}

pub fn test_seeds() -> Vec<NewIndividualTest> {
    vec![
        NewIndividualTest {
            name: "Complete Blood Count (CBC)".to_string(),
            description: "Comprehensive blood test that evaluates overall health and detects various disorders.".to_string(),
            price: 299,
            category: "Blood Test".to_string(),
            symptoms: vec![
                "Fatigue".to_string(),
                "Weakness".to_string(),
                "Fever".to_string(),
                "Bruising".to_string(),
            ],
            preparation_required: false,
            report_time: "6 hours".to_string(),
            home_collection: true,
        },
        NewIndividualTest {
            name: "Lipid Profile".to_string(),
            description: "Measures cholesterol levels and assesses cardiovascular risk.".to_string(),
            price: 399,
            category: "Cardiac".to_string(),
            symptoms: vec![
                "Chest pain".to_string(),
                "High blood pressure".to_string(),
                "Family history of heart disease".to_string(),
            ],
            preparation_required: true,
            report_time: "12 hours".to_string(),
            home_collection: true,
        },
        NewIndividualTest {
            name: "HbA1c (Glycated Hemoglobin)".to_string(),
            description: "Measures average blood sugar levels over the past 2-3 months.".to_string(),
            price: 499,
            category: "Diabetes".to_string(),
            symptoms: vec![
                "Excessive thirst".to_string(),
                "Frequent urination".to_string(),
                "Fatigue".to_string(),
                "Blurred vision".to_string(),
            ],
            preparation_required: false,
            report_time: "24 hours".to_string(),
            home_collection: true,
        },
        NewIndividualTest {
            name: "Thyroid Profile (T3, T4, TSH)".to_string(),
            description: "Evaluates thyroid gland function and metabolism.".to_string(),
            price: 599,
            category: "Hormonal".to_string(),
            symptoms: vec![
                "Weight changes".to_string(),
                "Fatigue".to_string(),
                "Hair loss".to_string(),
                "Mood changes".to_string(),
            ],
            preparation_required: false,
            report_time: "24 hours".to_string(),
            home_collection: true,
        },
        NewIndividualTest {
            name: "Vitamin D Total".to_string(),
            description: "Measures vitamin D levels for bone health assessment.".to_string(),
            price: 799,
            category: "Vitamins".to_string(),
            symptoms: vec![
                "Bone pain".to_string(),
                "Muscle weakness".to_string(),
                "Fatigue".to_string(),
                "Depression".to_string(),
            ],
            preparation_required: false,
            report_time: "48 hours".to_string(),
            home_collection: true,
        },
    ]
}

pub fn testimonial_seeds() -> Vec<NewTestimonial> {
    vec![
        NewTestimonial {
            name: "Priya Sharma".to_string(),
            location: "Mumbai".to_string(),
            rating: 5,
            comment: "Excellent service! The home collection was very convenient and the staff was professional. Got my reports on time with detailed explanations.".to_string(),
            approved: true,
        },
        NewTestimonial {
            name: "Rajesh Kumar".to_string(),
            location: "Delhi".to_string(),
            rating: 5,
            comment: "Very satisfied with the service. The phlebotomist was skilled and the entire process was smooth. Highly recommend for anyone looking for home collection.".to_string(),
            approved: true,
        },
        NewTestimonial {
            name: "Sneha Patel".to_string(),
            location: "Bangalore".to_string(),
            rating: 4,
            comment: "Good experience overall. The booking process was easy and the results were accurate. The home collection saved me a lot of time.".to_string(),
            approved: true,
        },
        NewTestimonial {
            name: "Amit Singh".to_string(),
            location: "Pune".to_string(),
            rating: 5,
            comment: "Outstanding service! The team is very professional and the reports are comprehensive. The convenience of home collection is unmatched.".to_string(),
            approved: true,
        },
    ]
}

pub fn faq_seeds() -> Vec<NewFaq> {
    vec![
        NewFaq {
            question: "How do I book a test for home collection?".to_string(),
            answer: "You can book a test by clicking the \"Book a Test\" button, selecting your desired tests or packages, providing your address, and choosing a convenient time slot. Our team will visit your location.".to_string(),
            category: "Booking".to_string(),
            active: true,
        },
        NewFaq {
            question: "Is home collection safe and hygienic?".to_string(),
            answer: "Yes, absolutely. Our certified phlebotomists follow strict hygiene protocols, use sterile equipment, and maintain the highest safety standards during home visits.".to_string(),
            category: "Safety".to_string(),
            active: true,
        },
        NewFaq {
            question: "How long does it take to get test results?".to_string(),
            answer: "Report delivery time varies by test type. Most routine tests are available within 6-24 hours, while specialized tests may take 48-72 hours. You'll receive an SMS/email notification when reports are ready.".to_string(),
            category: "Reports".to_string(),
            active: true,
        },
        NewFaq {
            question: "Can I download my reports online?".to_string(),
            answer: "Yes, you can securely download your reports using your unique User ID. Reports are also sent via email and SMS for your convenience.".to_string(),
            category: "Reports".to_string(),
            active: true,
        },
        NewFaq {
            question: "Do I need to prepare for the tests?".to_string(),
            answer: "Some tests require fasting or specific preparation. During booking, you'll receive detailed instructions for any preparation needed. Our team will also remind you before the visit.".to_string(),
            category: "Preparation".to_string(),
            active: true,
        },
        NewFaq {
            question: "Are your tests accurate and reliable?".to_string(),
            answer: "Yes, we use state-of-the-art equipment and follow international quality standards. Our lab is certified by NABL and CAP, ensuring accurate and reliable results.".to_string(),
            category: "Quality".to_string(),
            active: true,
        },
    ]
}

// ── Snapshot forms ──
//
// The same content as full rows for offline browsing. Ids here are stable
// placeholders; database seeding assigns fresh UUIDs instead.

pub fn packages() -> Vec<TestPackage> {
    let now = now();
    package_seeds()
        .into_iter()
        .enumerate()
        .map(|(i, p)| TestPackage {
            id: format!("pkg-{}", i + 1),
            name: p.name,
            description: p.description,
            price: p.price,
            original_price: p.original_price,
            tests: p.tests,
            category: p.category,
            popular: p.popular,
            home_collection: p.home_collection,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

pub fn tests() -> Vec<IndividualTest> {
    let now = now();
    test_seeds()
        .into_iter()
        .enumerate()
        .map(|(i, t)| IndividualTest {
            id: format!("test-{}", i + 1),
            name: t.name,
            description: t.description,
            price: t.price,
            category: t.category,
            symptoms: t.symptoms,
            preparation_required: t.preparation_required,
            report_time: t.report_time,
            home_collection: t.home_collection,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    let now = now();
    testimonial_seeds()
        .into_iter()
        .enumerate()
        .map(|(i, t)| Testimonial {
            id: format!("testimonial-{}", i + 1),
            name: t.name,
            location: t.location,
            rating: t.rating,
            comment: t.comment,
            approved: t.approved,
            created_at: now,
        })
        .collect()
}

pub fn faqs() -> Vec<Faq> {
    let now = now();
    faq_seeds()
        .into_iter()
        .enumerate()
        .map(|(i, f)| Faq {
            id: format!("faq-{}", i + 1),
            question: f.question,
            answer: f.answer,
            category: f.category,
            active: f.active,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
