//! Authentication bridge subsystem.
//!
//! # Data Flow
//! ```text
//! GET/POST /api/auth/*
//!     → bridge.rs (translate native request → canonical request)
//!     → handler.rs (AuthHandler capability, injected at startup)
//!     → bridge.rs (forward handler response → native reply)
//!     → error.rs (any fault → fixed 500 AUTH_FAILURE reply)
//! ```
//!
//! # Design Decisions
//! - The handler is an `Arc<dyn AuthHandler>` owned by the server process;
//!   route registration receives a handle, never a fresh instance
//! - The bridge itself never retries and never enforces timeouts; both are
//!   the handler's or the surrounding middleware's concern

pub mod bridge;
pub mod error;
pub mod handler;
pub mod upstream;

pub use bridge::auth_bridge;
pub use error::BridgeError;
pub use handler::{AuthHandler, AuthRequest, AuthResponse};
pub use upstream::UpstreamAuthHandler;
