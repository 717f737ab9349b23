//! Error types for template learning

use thiserror::Error;

/// Result type alias for templater operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while learning a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The learner is finalized; its template can no longer change.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}
