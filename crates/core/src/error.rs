//! Domain error type shared across the db and api layers.

use crate::types::DbId;

/// Domain-level errors. The api crate maps these onto HTTP responses;
/// the db crate returns them from orchestration helpers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a completeness predicate or numeric minimum.
    #[error("{0}")]
    Validation(String),

    /// A lifecycle transition was requested from a status that does not
    /// permit it. Carries both sides so callers can report exactly what
    /// was attempted.
    #[error("{entity} cannot move from '{current}' to '{requested}'")]
    InvalidState {
        entity: &'static str,
        current: &'static str,
        requested: &'static str,
    },

    /// A uniqueness or concurrent-modification conflict.
    #[error("{0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("{0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to act here.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
