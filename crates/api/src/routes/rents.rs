//! Route definitions for rents.

use axum::routing::get;
use axum::Router;

use crate::handlers::rents;
use crate::state::AppState;

/// Routes mounted at `/rents`.
///
/// ```text
/// GET    /                -> list_rents
/// POST   /                -> create_rent
/// GET    /{id}            -> get_rent
/// PUT    /{id}            -> update_rent
/// DELETE /{id}            -> delete_rent
/// GET    /{id}/locker     -> get_rent_locker
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rents::list_rents).post(rents::create_rent))
        .route(
            "/{id}",
            get(rents::get_rent)
                .put(rents::update_rent)
                .delete(rents::delete_rent),
        )
        .route("/{id}/locker", get(rents::get_rent_locker))
}
