//! Fault taxonomy for the authentication bridge.

use axum::BoxError;
use thiserror::Error;

/// Faults raised inside one bridge invocation.
///
/// All variants are contained by the bridge's route handler and mapped to the
/// uniform 500 `AUTH_FAILURE` reply; the variant distinction only reaches the
/// server-side log.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The inbound path and host could not be combined into an absolute URL.
    #[error("malformed request url: {0}")]
    MalformedUrl(#[from] url::ParseError),

    /// The inbound request body could not be read.
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    /// The authentication handler raised during invocation.
    #[error("authentication handler failed: {0}")]
    Handler(#[source] BoxError),

    /// The handler response could not be written back as a reply.
    #[error("failed to forward handler response: {0}")]
    Forward(String),
}
