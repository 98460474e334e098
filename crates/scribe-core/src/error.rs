//! Core domain errors.

use thiserror::Error;

/// Core domain errors for Scribe.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Research topic was empty or whitespace.
    #[error("topic must not be empty")]
    EmptyTopic,

    /// Output format outside the supported set.
    #[error("unsupported output format '{0}': expected 'summary', 'bullet points' or 'short report'")]
    InvalidOutputFormat(String),

    /// Task definition could not be interpreted.
    #[error("Invalid task definition: {0}")]
    InvalidTaskDefinition(String),
}
