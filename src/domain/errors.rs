//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Rejected user input on the feed form. The store is never mutated when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("message is empty")]
    EmptyMessage,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A catalog record broke a construction rule (empty name, coordinates out of range, bad date).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Community data could not be read or parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("UI error: {0}")]
    Ui(String),
}
