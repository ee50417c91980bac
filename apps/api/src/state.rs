use std::sync::Arc;

use crate::config::Config;
use crate::engine::CompletionEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The inference engine handle. Built once at startup, read-only afterwards.
    /// Tests substitute a scripted engine here.
    pub engine: Arc<dyn CompletionEngine>,
    /// Startup configuration, kept alongside the engine handle.
    #[allow(dead_code)]
    pub config: Config,
}
