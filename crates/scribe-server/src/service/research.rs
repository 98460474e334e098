//! Research request handling.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use scribe_core::{ExecutionFailure, ExecutionRequest, ExecutionResult};

use crate::poller::ExecutionPoller;
use crate::state::AppState;

/// Reasons a research request produced no result.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Startup registration never completed.
    #[error("Agent or Task not initialized properly.")]
    NotInitialized,

    /// The execution failed or could not be driven to completion.
    #[error("{}: {}", .0.message(), .0.details)]
    Execution(ExecutionFailure),
}

/// Bridges a validated request to the execution poller.
pub struct ResearchService {
    state: Arc<AppState>,
}

impl ResearchService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Run one research execution and return its text.
    pub async fn handle(&self, request: &ExecutionRequest) -> Result<String, ResearchError> {
        let session = match &self.state.session {
            Some(session) => session,
            None => {
                warn!("Research requested before agent and task were registered");
                return Err(ResearchError::NotInitialized);
            }
        };

        let poller = ExecutionPoller::new(self.state.platform.clone(), self.state.poll_interval);
        match poller.run(&session.task_id, request).await {
            ExecutionResult::Success { text } => {
                info!(topic = %request.topic, bytes = text.len(), "Research completed");
                Ok(text)
            }
            ExecutionResult::Failure(failure) => Err(ResearchError::Execution(failure)),
        }
    }
}
