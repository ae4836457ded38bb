//! Handlers for `/api/rents`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bloqit_db::repositories::RentRepo;
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/rents
pub async fn list_rents(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rents = RentRepo::list(state.store()).await?;
    Ok(Json(rents))
}

/// GET /api/rents/{id}
pub async fn get_rent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let rent = RentRepo::find_by_id(state.store(), &id).await?;
    Ok(Json(rent))
}

/// POST /api/rents
///
/// `id` and `createdAt` are assigned by the server.
pub async fn create_rent(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let rent = RentRepo::create(state.store(), &input).await?;

    tracing::info!(
        rent_id = %rent.id,
        locker_id = %rent.locker_id,
        size = %rent.size,
        "Rent created",
    );

    Ok(Json(rent))
}

/// PUT /api/rents/{id}
///
/// `lockerId` cannot be changed. Any status may be set.
pub async fn update_rent(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = payload?;
    let rent = RentRepo::update(state.store(), &id, &patch).await?;

    tracing::info!(rent_id = %rent.id, status = %rent.status, "Rent updated");

    Ok(Json(rent))
}

/// DELETE /api/rents/{id}
pub async fn delete_rent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    RentRepo::delete(state.store(), &id).await?;

    tracing::info!(rent_id = %id, "Rent deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/rents/{id}/locker
pub async fn get_rent_locker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let locker = RentRepo::find_locker(state.store(), &id).await?;
    Ok(Json(locker))
}
