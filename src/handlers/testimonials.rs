use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{NewTestimonial, Testimonial};
use crate::state::AppState;

// GET /api/testimonials, approved entries only
pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let testimonials = {
        let db = state.db.lock().unwrap();
        queries::list_approved_testimonials(&db).map_err(|e| {
            tracing::error!(error = %e, "failed to list testimonials");
            AppError::Internal("Failed to fetch testimonials")
        })?
    };
    Ok(Json(testimonials))
}

// POST /api/testimonials
pub async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Testimonial>), AppError> {
    let new: NewTestimonial = serde_json::from_value(body)
        .map_err(|_| AppError::Validation("Invalid testimonial data"))?;

    let testimonial = {
        let db = state.db.lock().unwrap();
        queries::insert_testimonial(&db, &new).map_err(|e| {
            tracing::error!(error = %e, "failed to create testimonial");
            AppError::Internal("Failed to create testimonial")
        })?
    };
    Ok((StatusCode::CREATED, Json(testimonial)))
}
