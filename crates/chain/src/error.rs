use aethera_core::error::CoreError;
use aethera_db::DbError;

/// Errors from mock chain operations.
///
/// The simulated chain itself never fails; errors come from input checks
/// and from the store rejecting the resulting state change.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] DbError),
}
