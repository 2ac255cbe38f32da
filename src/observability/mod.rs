//! Observability subsystem.
//!
//! Structured log events only: the resolver emits `tracing` events with
//! `path`/`destination` fields, tower-http adds a span per request.

pub mod logging;
