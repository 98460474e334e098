//! Client library for the managed agent execution platform.
//!
//! [`ExecutionPlatform`] is the seam the server programs against;
//! [`PlatformClient`] implements it over the platform's REST API.

pub mod error;
pub mod http;

use async_trait::async_trait;

use scribe_core::{
    AgentDefinition, AgentId, ExecutionId, ExecutionRequest, ExecutionSnapshot, TaskDefinition,
    TaskId,
};

pub use error::ClientError;
pub use http::{PlatformClient, DEFAULT_BASE_URL};

/// Operations consumed from the remote agent platform.
#[async_trait]
pub trait ExecutionPlatform: Send + Sync {
    /// Register an agent and return its platform-assigned id.
    async fn create_agent(&self, agent: &AgentDefinition) -> Result<AgentId, ClientError>;

    /// Register a task template bound to `agent_id`.
    async fn create_task(
        &self,
        agent_id: &AgentId,
        task: &TaskDefinition,
    ) -> Result<TaskId, ClientError>;

    /// Start one execution of `task_id` with the given input.
    async fn create_execution(
        &self,
        task_id: &TaskId,
        input: &ExecutionRequest,
    ) -> Result<ExecutionId, ClientError>;

    /// Fetch the current state of an execution.
    async fn get_execution(&self, id: &ExecutionId) -> Result<ExecutionSnapshot, ClientError>;
}
