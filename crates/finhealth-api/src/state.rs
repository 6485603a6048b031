//! Application state.

use std::sync::Arc;

use finhealth_analytics::AssessmentEngine;

use crate::config::ServerConfig;

/// Application state shared across handlers.
///
/// The engine is immutable, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Assessment engine built from `config.engine`.
    pub engine: Arc<AssessmentEngine>,

    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create state from a server configuration.
    pub fn new(config: ServerConfig) -> Self {
        let engine = AssessmentEngine::new(config.engine.clone());
        tracing::debug!(
            locales = engine.translations().locales().count(),
            "assessment engine ready"
        );
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
