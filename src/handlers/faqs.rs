use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Faq, NewFaq};
use crate::state::AppState;

// GET /api/faqs, active entries only
pub async fn list_faqs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Faq>>, AppError> {
    let faqs = {
        let db = state.db.lock().unwrap();
        queries::list_active_faqs(&db).map_err(|e| {
            tracing::error!(error = %e, "failed to list FAQs");
            AppError::Internal("Failed to fetch FAQs")
        })?
    };
    Ok(Json(faqs))
}

// POST /api/faqs
pub async fn create_faq(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Faq>), AppError> {
    let new: NewFaq =
        serde_json::from_value(body).map_err(|_| AppError::Validation("Invalid FAQ data"))?;

    let faq = {
        let db = state.db.lock().unwrap();
        queries::insert_faq(&db, &new).map_err(|e| {
            tracing::error!(error = %e, "failed to create FAQ");
            AppError::Internal("Failed to create FAQ")
        })?
    };
    Ok((StatusCode::CREATED, Json(faq)))
}
