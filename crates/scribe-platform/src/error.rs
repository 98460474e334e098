//! Error types for the platform client.

use thiserror::Error;

/// Errors that can occur when calling the remote platform.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The platform answered with a non-success status.
    #[error("platform returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not have the expected shape.
    #[error("could not decode platform response: {0}")]
    Decode(String),

    /// Client could not be constructed.
    #[error("invalid client configuration: {0}")]
    Config(String),
}
