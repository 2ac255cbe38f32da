//! Redirect table configuration.
//!
//! # Data Flow
//! ```text
//! YAML bytes
//!     → loader.rs (deserialize records, fold into Mapping)
//!     → validation.rs (semantic checks)
//!     → Mapping (immutable)
//!     → handed to PathResolver at startup
//! ```
//!
//! # Design Decisions
//! - The table is read once; changes require a restart
//! - Duplicate paths fold last-write-wins
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_mapping, parse_mapping, ConfigError, ConfigParseError};
pub use schema::{ListenerConfig, RedirectRecord};
pub use validation::{validate_mapping, ValidationError};
