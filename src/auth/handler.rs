//! The authentication handler capability.
//!
//! # Responsibilities
//! - Define the canonical request shape handed to the handler
//! - Define the response shape the handler produces
//! - Define the `AuthHandler` trait the server injects at startup
//!
//! # Design Decisions
//! - One handler instance per process, shared via `Arc<dyn AuthHandler>`
//! - Headers are an ordered multi-map: repeated names become repeated entries
//! - Response body presence is an `Option`, checked without consuming anything

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::Method;
use axum::BoxError;
use url::Url;

/// Canonical request handed to the authentication handler.
///
/// The URL is always absolute. Multi-valued headers appear as repeated
/// `(name, value)` entries in source order.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    pub url: Url,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    /// Raw body bytes as received, `None` when the request carried none.
    pub body: Option<Bytes>,
}

/// Response produced by the authentication handler.
#[derive(Debug, Clone)]
pub struct AuthResponse {
    /// HTTP status code, 100..=599.
    pub status: u16,
    /// Ordered header pairs; duplicates are forwarded as-is.
    pub headers: Vec<(String, String)>,
    /// Body text, `None` for bodiless responses such as 204.
    pub body: Option<String>,
}

/// Capability exposed by an external authentication system.
///
/// The server constructs exactly one handler at startup and passes it by
/// handle into route registration; it is never re-created per request.
#[async_trait]
pub trait AuthHandler: Send + Sync {
    /// Process one canonical request and produce a response, or fail.
    ///
    /// Errors propagate untouched to the bridge's containment boundary.
    /// Timeouts and cancellation are this handler's own responsibility.
    async fn handle(&self, request: AuthRequest) -> Result<AuthResponse, BoxError>;
}
