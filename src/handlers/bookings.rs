use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, NewBooking, UpdateBooking};
use crate::state::AppState;

// GET /api/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = {
        let db = state.db.lock().unwrap();
        queries::list_bookings(&db).map_err(|e| {
            tracing::error!(error = %e, "failed to list bookings");
            AppError::Internal("Failed to fetch bookings")
        })?
    };
    Ok(Json(bookings))
}

// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let booking = {
        let db = state.db.lock().unwrap();
        queries::get_booking(&db, &id).map_err(|e| {
            tracing::error!(error = %e, "failed to fetch booking");
            AppError::Internal("Failed to fetch booking")
        })?
    };
    booking.map(Json).ok_or(AppError::NotFound("Booking"))
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let new: NewBooking =
        serde_json::from_value(body).map_err(|_| AppError::Validation("Invalid booking data"))?;

    let booking = {
        let db = state.db.lock().unwrap();
        queries::insert_booking(&db, &new).map_err(|e| {
            tracing::error!(error = %e, "failed to create booking");
            AppError::Internal("Failed to create booking")
        })?
    };
    tracing::info!(booking_id = %booking.id, test = %booking.test_name, "booking created");
    Ok((StatusCode::CREATED, Json(booking)))
}

// PUT /api/bookings/:id
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Booking>, AppError> {
    let changes: UpdateBooking =
        serde_json::from_value(body).map_err(|_| AppError::Validation("Invalid booking data"))?;

    let booking = {
        let db = state.db.lock().unwrap();
        queries::update_booking(&db, &id, &changes).map_err(|e| {
            tracing::error!(error = %e, "failed to update booking");
            AppError::Internal("Failed to update booking")
        })?
    };
    booking.map(Json).ok_or(AppError::NotFound("Booking"))
}
