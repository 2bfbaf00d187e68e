use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The signed-in customer profile held by the session context and used to
/// prefill the booking wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
}

/// Row in the standalone credentials table. Not joined to bookings; kept
/// with the same shape the schema has always had.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password: String,
}
