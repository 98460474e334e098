//! One-time registration of the research agent and task.
//!
//! Every process start registers fresh records on the platform; nothing is
//! looked up or reused by name. Any failure here is fatal: the server must
//! not accept traffic without a [`Session`].

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use scribe_core::{AgentDefinition, AgentId, TaskDefinition, TaskId};
use scribe_platform::{ClientError, ExecutionPlatform};

use crate::config::Config;

const AGENT_NAME: &str = "Wikipedia Research Agent";

const AGENT_ABOUT: &str = "You are Research Assistant. Your primary goal is to provide accurate \
and concise information based on user requests by processing Wikipedia content.";

const AGENT_INSTRUCTIONS: [&str; 3] = [
    "You are processing content fetched from Wikipedia. Format this content strictly according \
to the user's request ('summary', 'bullet points', 'short report').",
    "Adhere to length and style constraints: summary (3-4 sentences), bullet points (max 5, use \
'*'), short report (under 150 words).",
    "If the provided content is insufficient or indicates an error, state that clearly.",
];

/// Identifiers of the agent and task registered at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub agent_id: AgentId,
    pub task_id: TaskId,
}

/// Fatal startup errors.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No API key was configured.
    #[error("platform API key is missing: set JULEP_API_KEY or pass --api-key")]
    MissingCredential,

    /// Platform client could not be built.
    #[error("failed to build platform client: {0}")]
    Client(#[source] ClientError),

    /// Platform refused to create the agent.
    #[error("agent creation failed: {0}")]
    AgentCreation(#[source] ClientError),

    /// Task definition file could not be read.
    #[error("failed to read task definition '{}': {source}", .path.display())]
    TaskFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Task definition file is not a valid YAML mapping.
    #[error("failed to parse task definition '{}': {reason}", .path.display())]
    TaskFileParse { path: PathBuf, reason: String },

    /// Platform refused to create the task.
    #[error("task creation failed: {0}")]
    TaskCreation(#[source] ClientError),
}

/// Return the configured API key, rejecting blank values.
pub fn require_api_key(config: &Config) -> Result<&str, BootstrapError> {
    match config.api_key.as_deref() {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(BootstrapError::MissingCredential),
    }
}

/// The research agent registered on every start.
pub fn research_agent(model: &str) -> AgentDefinition {
    AGENT_INSTRUCTIONS.iter().fold(
        AgentDefinition::new(AGENT_NAME, model).with_about(AGENT_ABOUT),
        |agent, instruction| agent.with_instruction(*instruction),
    )
}

/// Load a declarative task definition from a YAML file.
pub fn load_task_definition(path: &Path) -> Result<TaskDefinition, BootstrapError> {
    let content = std::fs::read_to_string(path).map_err(|source| BootstrapError::TaskFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_task_definition(&content).map_err(|reason| BootstrapError::TaskFileParse {
        path: path.to_path_buf(),
        reason,
    })
}

fn parse_task_definition(yaml: &str) -> Result<TaskDefinition, String> {
    let document: serde_json::Value = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
    TaskDefinition::from_value(document).map_err(|e| e.to_string())
}

/// Register the agent, then the task bound to it.
///
/// The task file is parsed before anything is created remotely so a broken
/// file does not leave an orphaned agent behind.
pub async fn initialize(
    platform: &dyn ExecutionPlatform,
    agent: &AgentDefinition,
    task_path: &Path,
) -> Result<Session, BootstrapError> {
    info!(path = %task_path.display(), "Loading task definition");
    let task = load_task_definition(task_path)?;

    info!(name = %agent.name, model = %agent.model, "Creating agent");
    let agent_id = platform
        .create_agent(agent)
        .await
        .map_err(BootstrapError::AgentCreation)?;
    info!(agent_id = %agent_id, "Agent created");

    info!(
        task = task.name().unwrap_or("unnamed"),
        agent_id = %agent_id,
        "Creating task"
    );
    let task_id = platform
        .create_task(&agent_id, &task)
        .await
        .map_err(BootstrapError::TaskCreation)?;
    info!(task_id = %task_id, "Task created");

    Ok(Session { agent_id, task_id })
}
