//! Typed RPC endpoint subsystem.
//!
//! The gateway only registers the endpoint and logs procedure failures;
//! procedure semantics live behind the JSON-RPC envelope.

pub mod handlers;

pub use handlers::rpc_endpoint;
