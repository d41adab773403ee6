//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity_type} not found.")]
    NotFound { entity_type: &'static str, id: String },

    /// Required input was absent. The message is shown to callers as-is.
    #[error("{0}")]
    Validation(String),

    /// Input was present but could not be interpreted.
    #[error("{0}")]
    Malformed(String),
}

/// Repository-level errors.
///
/// `NotFound` is the only variant callers are expected to branch on; every
/// other variant is an unhandled datastore failure.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepoError::NotFound)
    }
}
