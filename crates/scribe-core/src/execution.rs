//! Execution snapshots and outcomes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ExecutionId, ExecutionStatus};

/// Status label used for failures raised locally rather than by the platform.
pub const UNEXPECTED_ERROR_LABEL: &str = "unexpected error";

/// Details used when the platform reports a failure without explanation.
pub const NO_ERROR_DETAILS: &str = "No specific error details provided.";

/// Point-in-time view of a remote execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSnapshot {
    pub id: ExecutionId,

    pub status: ExecutionStatus,

    /// Output payload, present once the execution succeeded.
    #[serde(default)]
    pub output: Option<Value>,

    /// Error message, present when the execution failed.
    #[serde(default)]
    pub error: Option<String>,
}

impl ExecutionSnapshot {
    /// Create a snapshot with no output or error.
    pub fn new(id: impl Into<ExecutionId>, status: ExecutionStatus) -> Self {
        Self {
            id: id.into(),
            status,
            output: None,
            error: None,
        }
    }

    /// Builder method to set the output payload.
    pub fn with_output(mut self, output: Value) -> Self {
        self.output = Some(output);
        self
    }

    /// Builder method to set the error message.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Outcome of running one execution to a terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Success { text: String },
    Failure(ExecutionFailure),
}

/// Why an execution did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionFailure {
    /// Terminal status label, or `"unexpected error"`.
    pub status_label: String,

    pub details: String,
}

impl ExecutionFailure {
    /// Failure reported by the platform through a terminal status.
    pub fn terminal(status: ExecutionStatus, error: Option<String>) -> Self {
        let details = error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| NO_ERROR_DETAILS.to_string());

        Self {
            status_label: status.as_str().to_string(),
            details,
        }
    }

    /// Failure raised while talking to the platform.
    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        Self {
            status_label: UNEXPECTED_ERROR_LABEL.to_string(),
            details: err.to_string(),
        }
    }

    /// Returns true if the failure did not come from a terminal status.
    pub fn is_unexpected(&self) -> bool {
        self.status_label == UNEXPECTED_ERROR_LABEL
    }

    /// Human-readable summary suitable for an error body.
    pub fn message(&self) -> String {
        if self.is_unexpected() {
            "An unexpected error occurred during execution.".to_string()
        } else {
            format!("Execution failed with status: {}", self.status_label)
        }
    }
}

/// Coerce an output payload to text.
///
/// Missing and `null` payloads become the empty string; strings are taken
/// as-is; anything else is rendered as compact JSON.
pub fn output_to_text(output: Option<&Value>) -> String {
    match output {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
