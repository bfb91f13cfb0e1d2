//! Error handling for the roster core.
//!
//! Both errors are local, synchronous, and non-fatal: the store rejects
//! the operation and leaves the roster unchanged.

use thiserror::Error;

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Main error type for roster operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// One or more required draft fields are empty or unusable.
    #[error("missing or invalid fields: {}", fields.join(", "))]
    Validation { fields: Vec<&'static str> },

    /// An operation referenced an id that is not in the roster.
    #[error("no student with id {id}")]
    StudentNotFound { id: u32 },
}

impl RosterError {
    /// True when the error should be surfaced as a form-level message
    /// rather than a lookup failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, RosterError::Validation { .. })
    }
}
