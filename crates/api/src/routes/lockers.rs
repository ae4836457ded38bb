//! Route definitions for lockers.

use axum::routing::get;
use axum::Router;

use crate::handlers::lockers;
use crate::state::AppState;

/// Routes mounted at `/lockers`.
///
/// ```text
/// GET    /                -> list_lockers
/// POST   /                -> create_locker
/// GET    /{id}            -> get_locker
/// PUT    /{id}            -> update_locker
/// DELETE /{id}            -> delete_locker
/// GET    /{id}/rents      -> list_locker_rents
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lockers::list_lockers).post(lockers::create_locker))
        .route(
            "/{id}",
            get(lockers::get_locker)
                .put(lockers::update_locker)
                .delete(lockers::delete_locker),
        )
        .route("/{id}/rents", get(lockers::list_locker_rents))
}
