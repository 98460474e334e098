//! Scribe Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - HTTP clients or servers
//! - Runtime specifics
//!
//! All types here describe research executions on the remote agent platform.

pub mod error;
pub mod execution;
pub mod ids;
pub mod model;
pub mod request;
pub mod status;

// Re-export commonly used types
pub use error::CoreError;
pub use execution::{
    output_to_text, ExecutionFailure, ExecutionResult, ExecutionSnapshot, NO_ERROR_DETAILS,
    UNEXPECTED_ERROR_LABEL,
};
pub use ids::{AgentId, ExecutionId, TaskId};
pub use model::{AgentDefinition, TaskDefinition};
pub use request::{ExecutionRequest, OutputFormat};
pub use status::ExecutionStatus;
