//! Handlers for `/api/lockers`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bloqit_db::repositories::LockerRepo;
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/lockers
pub async fn list_lockers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let lockers = LockerRepo::list(state.store()).await?;
    Ok(Json(lockers))
}

/// GET /api/lockers/{id}
pub async fn get_locker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let locker = LockerRepo::find_by_id(state.store(), &id).await?;
    Ok(Json(locker))
}

/// POST /api/lockers
///
/// The referenced bloq must exist; otherwise 400 `Bloq not found`.
pub async fn create_locker(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let locker = LockerRepo::create(state.store(), &input).await?;

    tracing::info!(
        locker_id = %locker.id,
        facility_id = %locker.facility_id,
        "Locker created",
    );

    Ok(Json(locker))
}

/// PUT /api/lockers/{id}
///
/// `facilityId` cannot be changed.
pub async fn update_locker(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = payload?;
    let locker = LockerRepo::update(state.store(), &id, &patch).await?;

    tracing::info!(
        locker_id = %locker.id,
        status = %locker.status,
        is_occupied = locker.is_occupied,
        "Locker updated",
    );

    Ok(Json(locker))
}

/// DELETE /api/lockers/{id}
pub async fn delete_locker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    LockerRepo::delete(state.store(), &id).await?;

    tracing::info!(locker_id = %id, "Locker deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/lockers/{id}/rents
pub async fn list_locker_rents(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let rents = LockerRepo::list_rents(state.store(), &id).await?;
    Ok(Json(rents))
}
