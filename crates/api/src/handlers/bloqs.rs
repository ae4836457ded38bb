//! Handlers for `/api/bloqs`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bloqit_db::repositories::BloqRepo;
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/bloqs
pub async fn list_bloqs(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let bloqs = BloqRepo::list(state.store()).await?;
    Ok(Json(bloqs))
}

/// GET /api/bloqs/{id}
pub async fn get_bloq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let bloq = BloqRepo::find_by_id(state.store(), &id).await?;
    Ok(Json(bloq))
}

/// POST /api/bloqs
pub async fn create_bloq(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let bloq = BloqRepo::create(state.store(), &input).await?;

    tracing::info!(bloq_id = %bloq.id, title = %bloq.title, "Bloq created");

    Ok(Json(bloq))
}

/// PUT /api/bloqs/{id}
///
/// Partially update a bloq; omitted fields keep their value.
pub async fn update_bloq(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = payload?;
    let bloq = BloqRepo::update(state.store(), &id, &patch).await?;

    tracing::info!(bloq_id = %bloq.id, "Bloq updated");

    Ok(Json(bloq))
}

/// DELETE /api/bloqs/{id}
pub async fn delete_bloq(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    BloqRepo::delete(state.store(), &id).await?;

    tracing::info!(bloq_id = %id, "Bloq deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/bloqs/{id}/lockers
pub async fn list_bloq_lockers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let lockers = BloqRepo::list_lockers(state.store(), &id).await?;
    Ok(Json(lockers))
}
