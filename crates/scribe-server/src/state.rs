//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use scribe_platform::ExecutionPlatform;

use crate::bootstrap::Session;

/// Shared application state.
///
/// Built once at startup and only read afterwards.
pub struct AppState {
    /// Client for the remote agent platform.
    pub platform: Arc<dyn ExecutionPlatform>,

    /// Agent and task registered at startup.
    pub session: Option<Session>,

    /// Delay between execution status checks.
    pub poll_interval: Duration,
}

impl AppState {
    /// Create a new AppState wrapped in Arc.
    pub fn new(
        platform: Arc<dyn ExecutionPlatform>,
        session: Session,
        poll_interval: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            platform,
            session: Some(session),
            poll_interval,
        })
    }

    /// Create a state with no registered agent or task.
    pub fn uninitialized(
        platform: Arc<dyn ExecutionPlatform>,
        poll_interval: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            platform,
            session: None,
            poll_interval,
        })
    }
}
