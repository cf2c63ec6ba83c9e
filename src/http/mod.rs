//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, route dispatch)
//!     → route group handlers (rpc, chat, auth bridge)
//!     → Send to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
