use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use url::Url;

use auth_gateway::auth::UpstreamAuthHandler;
use auth_gateway::config::{load_config, GatewayConfig};
use auth_gateway::observability::{logging, metrics};
use auth_gateway::{HttpServer, Shutdown};

/// Gateway server exposing the RPC endpoint, chat routes, and the
/// authentication bridge.
#[derive(Debug, Parser)]
#[command(name = "auth-gateway", version)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logging::init_logging("auth_gateway=debug,tower_http=debug");

    tracing::info!("auth-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_url = %config.auth.upstream_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    // One handler instance for the whole process; route registration
    // receives a handle to it.
    let upstream_url = Url::parse(&config.auth.upstream_url)?;
    let auth_handler = Arc::new(UpstreamAuthHandler::new(upstream_url));

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, auth_handler);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
