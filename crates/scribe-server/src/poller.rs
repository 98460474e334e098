//! Drives one remote execution from creation to a terminal status.
//!
//! The loop has no iteration cap and no overall deadline: an execution
//! that never reaches a terminal status keeps its request waiting until the
//! platform gives up on it.
//!
//! Polling is deliberately tied to the request that started it. When a
//! caller disconnects, the server drops the handler future and with it the
//! future returned by [`ExecutionPoller::run`], so polling stops at its next
//! suspension point instead of running on unobserved. The remote execution
//! is not cancelled and keeps running on the platform.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, warn};

use scribe_core::{
    output_to_text, ExecutionFailure, ExecutionId, ExecutionRequest, ExecutionResult,
    ExecutionSnapshot, ExecutionStatus, TaskId,
};
use scribe_platform::{ClientError, ExecutionPlatform};

/// Errors raised while talking to the platform during one execution.
#[derive(Debug, Error)]
pub enum PollError {
    /// The platform refused to start the execution.
    #[error("failed to create execution: {0}")]
    Submission(#[source] ClientError),

    /// A status fetch failed.
    #[error("failed to fetch status of execution {id}: {source}")]
    Status {
        id: ExecutionId,
        source: ClientError,
    },
}

/// Runs executions against the platform, one status check per interval.
pub struct ExecutionPoller {
    platform: Arc<dyn ExecutionPlatform>,
    poll_interval: Duration,
}

impl ExecutionPoller {
    pub fn new(platform: Arc<dyn ExecutionPlatform>, poll_interval: Duration) -> Self {
        Self {
            platform,
            poll_interval,
        }
    }

    /// Run one execution of `task_id` to completion and classify the outcome.
    ///
    /// Never fails: platform errors become an "unexpected error" failure.
    pub async fn run(&self, task_id: &TaskId, request: &ExecutionRequest) -> ExecutionResult {
        match self.wait_for_terminal(task_id, request).await {
            Ok(snapshot) => classify(snapshot),
            Err(e) => {
                error!(task_id = %task_id, error = %e, "Execution aborted");
                ExecutionResult::Failure(ExecutionFailure::unexpected(e))
            }
        }
    }

    async fn wait_for_terminal(
        &self,
        task_id: &TaskId,
        request: &ExecutionRequest,
    ) -> Result<ExecutionSnapshot, PollError> {
        info!(
            task_id = %task_id,
            topic = %request.topic,
            output_format = %request.output_format,
            "Creating execution"
        );
        let execution_id = self
            .platform
            .create_execution(task_id, request)
            .await
            .map_err(PollError::Submission)?;
        info!(execution_id = %execution_id, "Execution created, polling status");

        loop {
            let snapshot = self
                .platform
                .get_execution(&execution_id)
                .await
                .map_err(|source| PollError::Status {
                    id: execution_id.clone(),
                    source,
                })?;

            info!(
                execution_id = %execution_id,
                status = snapshot.status.as_str(),
                "Execution status"
            );

            if snapshot.status.is_terminal() {
                return Ok(snapshot);
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

fn classify(snapshot: ExecutionSnapshot) -> ExecutionResult {
    match snapshot.status {
        ExecutionStatus::Succeeded => {
            info!(execution_id = %snapshot.id, "Execution succeeded");
            ExecutionResult::Success {
                text: output_to_text(snapshot.output.as_ref()),
            }
        }
        status => {
            let failure = ExecutionFailure::terminal(status, snapshot.error);
            warn!(
                execution_id = %snapshot.id,
                status = %failure.status_label,
                details = %failure.details,
                "Execution finished without result"
            );
            ExecutionResult::Failure(failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ScriptedPlatform, Step};
    use serde_json::json;

    const INTERVAL: Duration = Duration::from_secs(3);

    fn poller(platform: &Arc<ScriptedPlatform>) -> ExecutionPoller {
        ExecutionPoller::new(platform.clone(), INTERVAL)
    }

    fn request(topic: &str) -> ExecutionRequest {
        ExecutionRequest::new(topic, "summary").unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_returns_output_text() {
        let platform = Arc::new(ScriptedPlatform::new().with_script(
            "quantum",
            vec![Step::Succeeded(Some(json!("Quantum computing uses qubits.")))],
        ));

        let result = poller(&platform)
            .run(&TaskId::new("task-1"), &request("quantum"))
            .await;

        assert_eq!(
            result,
            ExecutionResult::Success {
                text: "Quantum computing uses qubits.".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_null_output_becomes_empty_text() {
        let platform = Arc::new(
            ScriptedPlatform::new()
                .with_script("empty", vec![Step::Succeeded(Some(serde_json::Value::Null))])
                .with_script("absent", vec![Step::Succeeded(None)]),
        );

        for topic in ["empty", "absent"] {
            let result = poller(&platform)
                .run(&TaskId::new("task-1"), &request(topic))
                .await;
            assert_eq!(
                result,
                ExecutionResult::Success {
                    text: String::new()
                }
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_until_terminal_with_spacing() {
        let non_terminal = 4;
        let mut steps = vec![Step::Status(ExecutionStatus::Created)];
        steps.extend((1..non_terminal).map(|_| Step::Status(ExecutionStatus::Running)));
        steps.push(Step::Succeeded(Some(json!("done"))));

        let platform = Arc::new(ScriptedPlatform::new().with_script("slow", steps));

        let result = poller(&platform)
            .run(&TaskId::new("task-1"), &request("slow"))
            .await;
        assert!(matches!(result, ExecutionResult::Success { .. }));

        let times = platform.fetch_times("slow");
        assert_eq!(times.len(), non_terminal + 1);
        for pair in times.windows(2) {
            assert!(pair[1] - pair[0] >= INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_terminal_failures() {
        let platform = Arc::new(
            ScriptedPlatform::new()
                .with_script(
                    "timeout",
                    vec![
                        Step::Status(ExecutionStatus::Running),
                        Step::Failed(ExecutionStatus::Failed, Some("model timeout".into())),
                    ],
                )
                .with_script(
                    "cancelled",
                    vec![Step::Failed(ExecutionStatus::Cancelled, None)],
                ),
        );

        let result = poller(&platform)
            .run(&TaskId::new("task-1"), &request("timeout"))
            .await;
        match result {
            ExecutionResult::Failure(failure) => {
                assert_eq!(failure.status_label, "failed");
                assert_eq!(failure.details, "model timeout");
                assert_eq!(failure.message(), "Execution failed with status: failed");
            }
            other => panic!("Expected Failure, got {:?}", other),
        }

        let result = poller(&platform)
            .run(&TaskId::new("task-1"), &request("cancelled"))
            .await;
        match result {
            ExecutionResult::Failure(failure) => {
                assert_eq!(failure.status_label, "cancelled");
                assert_eq!(failure.details, "No specific error details provided.");
            }
            other => panic!("Expected Failure, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_platform_errors_become_unexpected_failures() {
        let platform = Arc::new(ScriptedPlatform::new().rejecting_executions());
        let result = poller(&platform)
            .run(&TaskId::new("task-1"), &request("anything"))
            .await;
        match result {
            ExecutionResult::Failure(failure) => {
                assert!(failure.is_unexpected());
                assert!(failure.details.contains("failed to create execution"));
            }
            other => panic!("Expected Failure, got {:?}", other),
        }
        assert!(platform.fetch_times("anything").is_empty());

        let platform = Arc::new(ScriptedPlatform::new().with_script(
            "flaky",
            vec![
                Step::Status(ExecutionStatus::Running),
                Step::Broken("unexpected end of input".into()),
            ],
        ));
        let result = poller(&platform)
            .run(&TaskId::new("task-1"), &request("flaky"))
            .await;
        match result {
            ExecutionResult::Failure(failure) => {
                assert_eq!(failure.status_label, "unexpected error");
                assert!(failure.details.contains("exec-flaky"));
                assert!(failure.details.contains("unexpected end of input"));
            }
            other => panic!("Expected Failure, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_status_keeps_polling() {
        let platform = Arc::new(ScriptedPlatform::new().with_script(
            "odd",
            vec![
                Step::Status(ExecutionStatus::Unknown),
                Step::Status(ExecutionStatus::AwaitingInput),
                Step::Succeeded(Some(json!({"summary": "ok"}))),
            ],
        ));

        let result = poller(&platform)
            .run(&TaskId::new("task-1"), &request("odd"))
            .await;

        assert_eq!(
            result,
            ExecutionResult::Success {
                text: r#"{"summary":"ok"}"#.to_string()
            }
        );
        assert_eq!(platform.fetch_times("odd").len(), 3);
    }
}
