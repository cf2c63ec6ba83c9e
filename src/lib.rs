//! Authentication gateway server.
//!
//! A small HTTP server process exposing three surfaces: a typed RPC
//! endpoint, a chat route group, and a wildcard authentication bridge that
//! adapts the server's native request/reply to the canonical shape an
//! injected authentication handler expects.

// Core subsystems
pub mod auth;
pub mod config;
pub mod http;

// Route groups
pub mod chat;
pub mod rpc;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
