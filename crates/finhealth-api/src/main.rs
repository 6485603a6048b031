//! Finhealth API Server binary.

use clap::Parser;
use finhealth_api::{server::run_server, AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Finhealth Financial-Health Assessment REST API Server
#[derive(Parser, Debug)]
#[command(name = "finhealth-api-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "FINHEALTH_CONFIG")]
    config: Option<String>,

    /// Host address to bind to (overrides the config file)
    #[arg(short = 'H', long, env = "FINHEALTH_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long, env = "FINHEALTH_PORT")]
    port: Option<u16>,

    /// Largest accepted batch (overrides the config file)
    #[arg(long, env = "FINHEALTH_MAX_BATCH_SIZE")]
    max_batch_size: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from {path}");
            ServerConfig::from_file(path)?
        }
        None => ServerConfig::default(),
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(max_batch_size) = args.max_batch_size {
        config.max_batch_size = max_batch_size;
    }

    run_server(AppState::new(config)).await
}
