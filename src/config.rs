use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Base URL of the booking API. Empty means no remote backend is
    /// configured and the funnel runs against the local store.
    pub api_base_url: String,
    pub local_store_path: String,
    pub admin_email: String,
    pub admin_password: String,
    pub payment_secret: String,
    pub payment_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "labdesk.db".to_string()),
            api_base_url: env::var("API_BASE_URL").unwrap_or_default(),
            local_store_path: env::var("LOCAL_STORE_PATH")
                .unwrap_or_else(|_| "labdesk_store.json".to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@thelabs.in".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
            payment_secret: env::var("PAYMENT_SECRET")
                .unwrap_or_else(|_| "dev-payment-secret".to_string()),
            payment_delay_ms: env::var("PAYMENT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}
