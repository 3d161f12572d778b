use aethera_core::error::CoreError;

/// Errors raised by the store and its repositories.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain rule rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored blob could not be encoded or decoded.
    #[error("Blob '{key}' is not valid JSON: {source}")]
    Serialization {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<validator::ValidationErrors> for DbError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DbError::Core(CoreError::from(errors))
    }
}
