pub mod bloqs;
pub mod health;
pub mod lockers;
pub mod rents;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /bloqs                       list, create
/// /bloqs/{id}                  get, update, delete
/// /bloqs/{id}/lockers          lockers of a bloq
///
/// /lockers                     list, create
/// /lockers/{id}                get, update, delete
/// /lockers/{id}/rents          rents of a locker
///
/// /rents                       list, create
/// /rents/{id}                  get, update, delete
/// /rents/{id}/locker           locker of a rent
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bloqs", bloqs::router())
        .nest("/lockers", lockers::router())
        .nest("/rents", rents::router())
}
