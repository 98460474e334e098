//! REST client for the managed agent platform.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use scribe_core::{
    AgentDefinition, AgentId, ExecutionId, ExecutionRequest, ExecutionSnapshot, ExecutionStatus,
    TaskDefinition, TaskId,
};

use crate::error::ClientError;
use crate::ExecutionPlatform;

/// Public endpoint of the hosted platform.
pub const DEFAULT_BASE_URL: &str = "https://api.julep.ai/api";

/// Timeout applied to each individual HTTP call.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the platform's REST API.
pub struct PlatformClient {
    inner: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Body returned by every create endpoint.
#[derive(Debug, Deserialize)]
struct CreatedResource {
    id: String,
}

#[derive(Debug, Serialize)]
struct CreateExecutionBody<'a> {
    input: &'a ExecutionRequest,
}

#[derive(Debug, Deserialize)]
struct ExecutionResponse {
    status: ExecutionStatus,
    #[serde(default)]
    output: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl PlatformClient {
    /// Create a new client with the default per-request timeout.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, api_key, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a new client with an explicit per-request timeout.
    pub fn with_timeout(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ClientError::Config("API key must not be empty".to_string()));
        }

        let inner = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl ExecutionPlatform for PlatformClient {
    async fn create_agent(&self, agent: &AgentDefinition) -> Result<AgentId, ClientError> {
        let created: CreatedResource = self.post_json("/agents", agent).await?;
        Ok(AgentId::new(created.id))
    }

    async fn create_task(
        &self,
        agent_id: &AgentId,
        task: &TaskDefinition,
    ) -> Result<TaskId, ClientError> {
        let path = format!("/agents/{}/tasks", agent_id);
        let created: CreatedResource = self.post_json(&path, task.spec()).await?;
        Ok(TaskId::new(created.id))
    }

    async fn create_execution(
        &self,
        task_id: &TaskId,
        input: &ExecutionRequest,
    ) -> Result<ExecutionId, ClientError> {
        let path = format!("/tasks/{}/executions", task_id);
        let created: CreatedResource = self
            .post_json(&path, &CreateExecutionBody { input })
            .await?;
        Ok(ExecutionId::new(created.id))
    }

    async fn get_execution(&self, id: &ExecutionId) -> Result<ExecutionSnapshot, ClientError> {
        let path = format!("/executions/{}", id);
        let execution: ExecutionResponse = self.get_json(&path).await?;

        Ok(ExecutionSnapshot {
            id: id.clone(),
            status: execution.status,
            output: execution.output,
            error: execution.error,
        })
    }
}
