//! Route definitions for bloqs.

use axum::routing::get;
use axum::Router;

use crate::handlers::bloqs;
use crate::state::AppState;

/// Routes mounted at `/bloqs`.
///
/// ```text
/// GET    /                -> list_bloqs
/// POST   /                -> create_bloq
/// GET    /{id}            -> get_bloq
/// PUT    /{id}            -> update_bloq
/// DELETE /{id}            -> delete_bloq
/// GET    /{id}/lockers    -> list_bloq_lockers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bloqs::list_bloqs).post(bloqs::create_bloq))
        .route(
            "/{id}",
            get(bloqs::get_bloq)
                .put(bloqs::update_bloq)
                .delete(bloqs::delete_bloq),
        )
        .route("/{id}/lockers", get(bloqs::list_bloq_lockers))
}
