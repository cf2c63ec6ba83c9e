//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Construct handler → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl-C or trigger → Stop accepting → Drain connections → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
