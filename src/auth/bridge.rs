//! The bridge between the server's native request/reply and the
//! authentication handler.
//!
//! # Data Flow
//! ```text
//! inbound request (axum)
//!     → translate: absolute URL + flattened headers + raw body bytes
//!     → AuthHandler::handle (single suspension point)
//!     → forward: status, headers in order, body → one Response
//!     → on any fault: log + fixed 500 AUTH_FAILURE reply
//! ```
//!
//! # Design Decisions
//! - Each step returns an explicit `Result`; the route handler is the single
//!   containment boundary, so no fault reaches the framework's error path
//! - Header multiplicity is forwarded as-is: no dedup, no comma-joining
//! - The reply is built fully buffered and finalized exactly once on return

use std::time::Instant;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use url::Url;

use crate::auth::error::BridgeError;
use crate::auth::handler::{AuthHandler, AuthRequest, AuthResponse};
use crate::http::server::AppState;
use crate::observability::metrics;

/// Maximum inbound body the bridge will buffer.
const AUTH_BODY_LIMIT: usize = 1024 * 1024;

/// Fixed reply body for any fault inside the bridge.
#[derive(Debug, Serialize)]
struct AuthFailureBody {
    error: &'static str,
    code: &'static str,
}

/// Wildcard route handler for `/api/auth/*`.
///
/// Translates the inbound request, invokes the authentication handler, and
/// forwards its response. Every fault ends here in exactly one finalized
/// 500 reply with the fixed `AUTH_FAILURE` shape.
pub async fn auth_bridge(State(state): State<AppState>, request: Request) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();

    match run_bridge(state.auth.as_ref(), request).await {
        Ok(reply) => {
            metrics::record_request(&method, reply.status().as_u16(), "auth", started);
            reply
        }
        Err(fault) => {
            tracing::error!(error = %fault, "Authentication bridge failure");
            metrics::record_request(&method, 500, "auth", started);
            let body = AuthFailureBody {
                error: "Internal authentication error",
                code: "AUTH_FAILURE",
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

async fn run_bridge(handler: &dyn AuthHandler, request: Request) -> Result<Response, BridgeError> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, AUTH_BODY_LIMIT)
        .await
        .map_err(BridgeError::BodyRead)?;
    let canonical = translate(&parts, bytes)?;
    let response = handler
        .handle(canonical)
        .await
        .map_err(BridgeError::Handler)?;
    forward(response)
}

/// Build the canonical request from the server-native request parts and the
/// already-collected body bytes.
pub fn translate(parts: &Parts, body: Bytes) -> Result<AuthRequest, BridgeError> {
    // Scheme is fixed: the gateway is deployed behind a TLS-terminating proxy.
    let host = parts
        .headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| parts.uri.authority().map(|authority| authority.as_str()))
        .unwrap_or_default();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let url = Url::parse(&format!("http://{host}{path_and_query}"))?;

    let mut headers = Vec::with_capacity(parts.headers.len());
    for (name, value) in parts.headers.iter() {
        // Values that are not valid UTF-8 are skipped, not forwarded lossily.
        if let Ok(text) = value.to_str() {
            headers.push((name.as_str().to_owned(), text.to_owned()));
        }
    }

    let body = if body.is_empty() { None } else { Some(body) };

    Ok(AuthRequest {
        url,
        method: parts.method.clone(),
        headers,
        body,
    })
}

/// Write the handler response onto a fresh server-native reply.
///
/// Status is set before any header; headers keep handler order and
/// multiplicity; an absent body becomes an empty one.
pub fn forward(response: AuthResponse) -> Result<Response, BridgeError> {
    let status = StatusCode::from_u16(response.status)
        .map_err(|_| BridgeError::Forward(format!("invalid status code {}", response.status)))?;

    let mut builder = Response::builder().status(status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let body = match response.body {
        Some(text) => Body::from(text),
        None => Body::empty(),
    };

    builder
        .body(body)
        .map_err(|fault| BridgeError::Forward(fault.to_string()))
}
