use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{NewTestPackage, TestPackage};
use crate::state::AppState;

// GET /api/test-packages
pub async fn list_packages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TestPackage>>, AppError> {
    let packages = {
        let db = state.db.lock().unwrap();
        queries::list_test_packages(&db).map_err(|e| {
            tracing::error!(error = %e, "failed to list test packages");
            AppError::Internal("Failed to fetch test packages")
        })?
    };
    Ok(Json(packages))
}

// GET /api/test-packages/:id
pub async fn get_package(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TestPackage>, AppError> {
    let package = {
        let db = state.db.lock().unwrap();
        queries::get_test_package(&db, &id).map_err(|e| {
            tracing::error!(error = %e, "failed to fetch test package");
            AppError::Internal("Failed to fetch test package")
        })?
    };
    package
        .map(Json)
        .ok_or(AppError::NotFound("Test package"))
}

// POST /api/test-packages
pub async fn create_package(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<TestPackage>), AppError> {
    let new: NewTestPackage = serde_json::from_value(body)
        .map_err(|_| AppError::Validation("Invalid test package data"))?;

    let package = {
        let db = state.db.lock().unwrap();
        queries::insert_test_package(&db, &new).map_err(|e| {
            tracing::error!(error = %e, "failed to create test package");
            AppError::Internal("Failed to create test package")
        })?
    };
    Ok((StatusCode::CREATED, Json(package)))
}
