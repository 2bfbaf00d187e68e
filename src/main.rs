use std::sync::{Arc, Mutex};

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use labdesk::config::AppConfig;
use labdesk::db;
use labdesk::handlers;
use labdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;
    db::seed_reference_data(&conn)?;

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/test-packages",
            get(handlers::test_packages::list_packages),
        )
        .route(
            "/api/test-packages",
            post(handlers::test_packages::create_package),
        )
        .route(
            "/api/test-packages/:id",
            get(handlers::test_packages::get_package),
        )
        .route(
            "/api/individual-tests",
            get(handlers::individual_tests::list_tests),
        )
        .route(
            "/api/individual-tests",
            post(handlers::individual_tests::create_test),
        )
        .route(
            "/api/individual-tests/:id",
            get(handlers::individual_tests::get_test),
        )
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/bookings/:id", get(handlers::bookings::get_booking))
        .route("/api/bookings/:id", put(handlers::bookings::update_booking))
        .route(
            "/api/testimonials",
            get(handlers::testimonials::list_testimonials),
        )
        .route(
            "/api/testimonials",
            post(handlers::testimonials::create_testimonial),
        )
        .route("/api/faqs", get(handlers::faqs::list_faqs))
        .route("/api/faqs", post(handlers::faqs::create_faq))
        .route("/api/reports", get(handlers::reports::list_reports))
        .route("/api/reports", post(handlers::reports::create_report))
        .route("/api/reports/:id", get(handlers::reports::get_report))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
