//! HTTP front end.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing layer)
//!     → routing::PathResolver (redirect or delegate)
//!     → fallback service on a miss
//!     → Send to client
//! ```

pub mod server;

pub use server::{not_found, shutdown_signal, RedirectServer};
