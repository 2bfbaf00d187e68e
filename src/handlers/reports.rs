use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{NewReport, Report};
use crate::state::AppState;

// GET /api/reports
pub async fn list_reports(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Report>>, AppError> {
    let reports = {
        let db = state.db.lock().unwrap();
        queries::list_reports(&db).map_err(|e| {
            tracing::error!(error = %e, "failed to list reports");
            AppError::Internal("Failed to fetch reports")
        })?
    };
    Ok(Json(reports))
}

// GET /api/reports/:id
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Report>, AppError> {
    let report = {
        let db = state.db.lock().unwrap();
        queries::get_report(&db, &id).map_err(|e| {
            tracing::error!(error = %e, "failed to fetch report");
            AppError::Internal("Failed to fetch report")
        })?
    };
    report.map(Json).ok_or(AppError::NotFound("Report"))
}

// POST /api/reports
pub async fn create_report(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Report>), AppError> {
    let new: NewReport =
        serde_json::from_value(body).map_err(|_| AppError::Validation("Invalid report data"))?;

    let report = {
        let db = state.db.lock().unwrap();
        queries::insert_report(&db, &new).map_err(|e| {
            tracing::error!(error = %e, "failed to create report");
            AppError::Internal("Failed to create report")
        })?
    };
    Ok((StatusCode::CREATED, Json(report)))
}
