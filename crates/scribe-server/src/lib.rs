//! Scribe Server Library
//!
//! Registers a research agent and task with the remote agent platform,
//! then serves an HTTP API that runs one platform execution per request.

pub mod bootstrap;
pub mod config;
pub mod http;
pub mod poller;
pub mod service;
pub mod state;

#[cfg(test)]
mod testing;

pub use bootstrap::{BootstrapError, Session};
pub use config::Config;
pub use poller::ExecutionPoller;
pub use service::{ResearchError, ResearchService};
pub use state::AppState;
