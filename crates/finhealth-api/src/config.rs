//! Server configuration.

use std::path::Path;

use finhealth_analytics::EngineConfig;
use finhealth_core::{FinhealthError, FinhealthResult};
use serde::{Deserialize, Serialize};

/// Server configuration.
///
/// ```toml
/// host = "0.0.0.0"
/// port = 8080
/// max_batch_size = 500
///
/// [engine]
/// parallel_threshold = 32
///
/// [engine.locales.mr]
/// Strong = "मजबूत"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted batch
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,

    /// Assessment engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_batch_size() -> usize {
    1000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_batch_size: default_max_batch_size(),
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> FinhealthResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FinhealthError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> FinhealthResult<Self> {
        toml::from_str(content).map_err(|e| FinhealthError::config(e.to_string()))
    }

    /// Bind address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
