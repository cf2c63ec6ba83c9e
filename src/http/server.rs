//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all route groups
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind the server to a listener and serve until shutdown
//!
//! Route groups registered on this process:
//! - `GET /api` welcome probe
//! - `POST /api/rpc` typed RPC endpoint
//! - `/api/chat/*` chat routes
//! - `GET|POST /api/auth/*` authentication bridge

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::auth::{auth_bridge, AuthHandler};
use crate::chat::{self, ChatStore};
use crate::config::GatewayConfig;
use crate::rpc;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide authentication handler, constructed once at startup.
    pub auth: Arc<dyn AuthHandler>,
    pub chat: ChatStore,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and
    /// authentication handler.
    pub fn new(config: GatewayConfig, auth: Arc<dyn AuthHandler>) -> Self {
        let state = AppState {
            auth,
            chat: ChatStore::new(),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all route groups and middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/api", get(welcome))
            .route("/api/rpc", post(rpc::rpc_endpoint))
            .nest("/api/chat", chat::router())
            .route("/api/auth/{*path}", get(auth_bridge).post(auth_bridge))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// A clone of the router, for driving the service in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener until
    /// Ctrl-C or the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                    }
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// API connectivity probe.
async fn welcome() -> &'static str {
    "Welcome to the API!"
}
