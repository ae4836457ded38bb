use bloqit_core::error::CoreError;

use crate::store::StoreError;

/// Error returned by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A domain error: not found, validation, immutable field, integrity.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The underlying collection could not be loaded or saved.
    #[error(transparent)]
    Store(#[from] StoreError),
}
