//! Application state for the pay package API.

use std::sync::Arc;

use crate::config::EngineConfig;

/// Shared application state.
///
/// Holds the rate card every request is evaluated against. The engine is
/// pure, so handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<EngineConfig>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
