//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CampusError`] via `From`.

/// Base error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CampusError {
    /// A supplied record could not be accepted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup by identifier found nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The underlying store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Raised when a lookup by identifier has no match.
///
/// The display form is part of the public API contract:
/// `"<entity> with id <id> not found"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Entity type name, e.g. `HelpRequest`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: i64,
}

/// Domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A replacement record did not match the entity's shape.
    #[error("invalid {entity} record: {reason}")]
    InvalidRecord {
        entity: &'static str,
        reason: String,
    },
}
