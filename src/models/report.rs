use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub booking_id: String,
    pub user_id: String,
    pub report_url: String,
    pub report_password: String,
    pub generated_at: NaiveDateTime,
    #[serde(default)]
    pub downloaded_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub booking_id: String,
    pub user_id: String,
    pub report_url: String,
    pub report_password: String,
}
