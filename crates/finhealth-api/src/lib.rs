//! Finhealth REST API Server.
//!
//! Serves the assessment engine over HTTP.
//!
//! ## Endpoints
//!
//! - `GET  /health`
//! - `GET  /api/v1/locales`
//! - `POST /api/v1/assess`
//! - `POST /api/v1/assess/batch`
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port
//! finhealth-api-server
//!
//! # Custom host and port
//! finhealth-api-server --host 0.0.0.0 --port 3000
//!
//! # Load settings (including extra locale tables) from TOML
//! finhealth-api-server --config finhealth.toml
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::create_router;
pub use state::AppState;
