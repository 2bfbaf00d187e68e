use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: i32,
    pub comment: String,
    #[serde(default)]
    pub approved: bool,
    pub created_at: NaiveDateTime,
}

/// Public submissions default to unapproved and stay hidden until reviewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub location: String,
    pub rating: i32,
    pub comment: String,
    #[serde(default)]
    pub approved: bool,
}
