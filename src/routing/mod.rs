//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → resolver.rs (exact lookup in frozen table)
//!     → hit:  302 Found, Location = destination
//!     → miss: fallback service, request untouched
//!
//! Table Compilation (at startup):
//!     Mapping
//!     → Convert destinations to header values
//!     → Freeze behind Arc
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime
//! - Exact path match only, no prefixes or patterns
//! - Deterministic: same path always resolves the same way

pub mod mapping;
pub mod resolver;

pub use mapping::Mapping;
pub use resolver::{PathResolver, Resolution};
