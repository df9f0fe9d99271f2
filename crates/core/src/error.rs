use crate::types::DbId;

/// A failure in the persistence backend (connectivity, statement
/// execution). Carries the underlying message for server-side logging;
/// the API layer never forwards it to clients verbatim.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Wrap any displayable driver error.
    pub fn new(source: impl std::fmt::Display) -> Self {
        Self(source.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
