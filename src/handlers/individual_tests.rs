use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{IndividualTest, NewIndividualTest};
use crate::state::AppState;

// GET /api/individual-tests
pub async fn list_tests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IndividualTest>>, AppError> {
    let tests = {
        let db = state.db.lock().unwrap();
        queries::list_individual_tests(&db).map_err(|e| {
            tracing::error!(error = %e, "failed to list individual tests");
            AppError::Internal("Failed to fetch individual tests")
        })?
    };
    Ok(Json(tests))
}

// GET /api/individual-tests/:id
pub async fn get_test(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<IndividualTest>, AppError> {
    let test = {
        let db = state.db.lock().unwrap();
        queries::get_individual_test(&db, &id).map_err(|e| {
            tracing::error!(error = %e, "failed to fetch individual test");
            AppError::Internal("Failed to fetch individual test")
        })?
    };
    test.map(Json).ok_or(AppError::NotFound("Individual test"))
}

// POST /api/individual-tests
pub async fn create_test(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<IndividualTest>), AppError> {
    let new: NewIndividualTest = serde_json::from_value(body)
        .map_err(|_| AppError::Validation("Invalid individual test data"))?;

    let test = {
        let db = state.db.lock().unwrap();
        queries::insert_individual_test(&db, &new).map_err(|e| {
            tracing::error!(error = %e, "failed to create individual test");
            AppError::Internal("Failed to create individual test")
        })?
    };
    Ok((StatusCode::CREATED, Json(test)))
}
