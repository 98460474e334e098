//! Server configuration.

use std::path::PathBuf;
use std::time::Duration;

use scribe_platform::DEFAULT_BASE_URL;

/// Status checks are never spaced more tightly than this.
pub const MIN_POLL_INTERVAL_SECS: u64 = 3;

/// Model used by the research agent unless overridden.
pub const DEFAULT_AGENT_MODEL: &str = "gemini-2.0-flash";

/// Server configuration.
pub struct Config {
    /// HTTP server bind address.
    pub http_addr: String,

    /// Platform API key. Bootstrap refuses to start without it.
    pub api_key: Option<String>,

    /// Platform REST base URL.
    pub api_base_url: String,

    /// Declarative task definition loaded at startup.
    pub task_file: PathBuf,

    /// Model identifier registered for the research agent.
    pub agent_model: String,

    /// Delay between execution status checks (seconds).
    pub poll_interval_secs: u64,

    /// Timeout for each individual platform call (seconds).
    pub request_timeout_secs: u64,
}

impl Config {
    /// Delay between status checks, never below the minimum.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(MIN_POLL_INTERVAL_SECS))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: "127.0.0.1:8000".to_string(),
            api_key: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            task_file: PathBuf::from("search_task.yaml"),
            agent_model: DEFAULT_AGENT_MODEL.to_string(),
            poll_interval_secs: MIN_POLL_INTERVAL_SECS,
            request_timeout_secs: 30,
        }
    }
}
