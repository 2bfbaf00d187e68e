pub mod migrations;
pub mod queries;

use anyhow::Context;
use rusqlite::Connection;

use crate::services::fallback;

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
        .context("failed to set database pragmas")?;

    migrations::run_migrations(&conn)?;

    Ok(conn)
}

/// Seeds the browsing tables from the embedded catalog so a fresh install
/// serves real content. No-op once any package exists.
pub fn seed_reference_data(conn: &Connection) -> anyhow::Result<()> {
    let package_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM test_packages", [], |row| row.get(0))?;
    if package_count > 0 {
        return Ok(());
    }

    for pkg in fallback::package_seeds() {
        queries::insert_test_package(conn, &pkg)?;
    }
    for test in fallback::test_seeds() {
        queries::insert_individual_test(conn, &test)?;
    }
    for testimonial in fallback::testimonial_seeds() {
        queries::insert_testimonial(conn, &testimonial)?;
    }
    for faq in fallback::faq_seeds() {
        queries::insert_faq(conn, &faq)?;
    }

    tracing::info!("seeded catalog reference data");
    Ok(())
}
