//! Domain-level error taxonomy shared by all crates.

use crate::types::DbId;

/// Domain error returned by validation and authorization logic.
///
/// The API layer maps each variant onto an HTTP status code; this crate
/// stays transport-agnostic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by primary key found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A field failed validation. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    /// The request conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// No valid session was presented.
    #[error("{0}")]
    Unauthorized(String),

    /// A session was presented but it does not own the target record.
    #[error("{0}")]
    Forbidden(String),

    /// An invariant was broken internally. Never shown verbatim to users.
    #[error("{0}")]
    Internal(String),
}

/// Convenience alias for fallible domain operations.
pub type CoreResult<T> = Result<T, CoreError>;
