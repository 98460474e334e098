//! Execution status reported by the remote platform.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a remote execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    /// Accepted but not yet scheduled.
    Queued,
    /// Record created.
    Created,
    /// Being picked up by the platform.
    Starting,
    /// Actively executing.
    Running,
    /// Paused waiting for external input.
    AwaitingInput,
    /// Completed successfully.
    Succeeded,
    /// Completed with an error.
    Failed,
    /// Cancelled on the platform side.
    Cancelled,
    /// A status label this build does not know about.
    #[serde(other)]
    Unknown,
}

impl ExecutionStatus {
    /// Returns true once the status can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }

    /// Wire label of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Created => "created",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::AwaitingInput => "awaiting_input",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}
