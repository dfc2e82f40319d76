//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use vestor_chat::ChatOrchestrator;
use vestor_core::VestorConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// The chat pipeline.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Application configuration (read-only after startup).
    pub config: Arc<VestorConfig>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the given components.
    pub fn new(orchestrator: ChatOrchestrator, config: VestorConfig) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }
}
