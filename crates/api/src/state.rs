use std::sync::Arc;

use bloqit_db::CollectionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Collection store backing every entity service.
    pub store: Arc<dyn CollectionStore>,
}

impl AppState {
    pub fn store(&self) -> &dyn CollectionStore {
        self.store.as_ref()
    }
}
