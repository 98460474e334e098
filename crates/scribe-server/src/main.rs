//! Scribe research API server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use scribe_platform::{PlatformClient, DEFAULT_BASE_URL};
use scribe_server::config::{DEFAULT_AGENT_MODEL, MIN_POLL_INTERVAL_SECS};
use scribe_server::{bootstrap, http, AppState, BootstrapError, Config};

/// Research assistant API backed by a managed agent platform.
#[derive(Parser)]
#[command(
    name = "scribe-server",
    about = "Research assistant API backed by a managed agent platform"
)]
struct Args {
    /// HTTP server address
    #[arg(long, env = "SCRIBE_HTTP_ADDR", default_value = "127.0.0.1:8000")]
    http_addr: String,

    /// Platform API key
    #[arg(long, env = "JULEP_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Platform REST base URL
    #[arg(long, env = "JULEP_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    api_base_url: String,

    /// Path to the declarative task definition (YAML)
    #[arg(long, env = "SCRIBE_TASK_FILE", default_value = "search_task.yaml")]
    task_file: PathBuf,

    /// Model used by the research agent
    #[arg(long, env = "SCRIBE_AGENT_MODEL", default_value = DEFAULT_AGENT_MODEL)]
    agent_model: String,

    /// Seconds between execution status checks (minimum 3)
    #[arg(
        long,
        env = "SCRIBE_POLL_INTERVAL_SECS",
        default_value_t = MIN_POLL_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(MIN_POLL_INTERVAL_SECS..)
    )]
    poll_interval_secs: u64,

    /// Timeout in seconds for each platform call
    #[arg(long, env = "SCRIBE_REQUEST_TIMEOUT_SECS", default_value = "30")]
    request_timeout_secs: u64,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            http_addr: args.http_addr,
            api_key: args.api_key,
            api_base_url: args.api_base_url,
            task_file: args.task_file,
            agent_model: args.agent_model,
            poll_interval_secs: args.poll_interval_secs,
            request_timeout_secs: args.request_timeout_secs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config: Config = Args::parse().into();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("scribe_server=info,scribe_platform=info,tower_http=info")
            }),
        )
        .with_target(true)
        .init();

    info!(base_url = %config.api_base_url, "Starting Scribe server");

    let state = match start(&config).await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Bootstrap failed, refusing to serve");
            return Err(e.into());
        }
    };

    let router = http::create_router(state);
    let listener = TcpListener::bind(&config.http_addr).await?;
    info!("HTTP server listening on {}", config.http_addr);

    axum::serve(listener, router).await?;

    Ok(())
}

/// Register the agent and task, producing the state requests are served from.
async fn start(config: &Config) -> Result<Arc<AppState>, BootstrapError> {
    let api_key = bootstrap::require_api_key(config)?;
    let platform = Arc::new(
        PlatformClient::with_timeout(&config.api_base_url, api_key, config.request_timeout())
            .map_err(BootstrapError::Client)?,
    );
    info!(base_url = %platform.base_url(), "Platform client ready");

    let agent = bootstrap::research_agent(&config.agent_model);
    let session = bootstrap::initialize(platform.as_ref(), &agent, &config.task_file).await?;
    info!(
        agent_id = %session.agent_id,
        task_id = %session.task_id,
        "Bootstrap complete"
    );

    Ok(AppState::new(platform, session, config.poll_interval()))
}
