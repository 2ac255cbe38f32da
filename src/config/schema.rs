//! Configuration schema definitions.
//!
//! Redirect records deserialize from the YAML redirect table. Listener
//! settings come from the command line.

use serde::Deserialize;

/// One `{path, url}` record of the redirect table.
///
/// Missing fields default to the empty string and unknown fields are ignored.
/// Empty values parse fine but are rejected by
/// [`validate_mapping`](crate::config::validation::validate_mapping).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedirectRecord {
    /// Request path to match exactly.
    pub path: String,

    /// Redirect destination, absolute or relative.
    pub url: String,
}

/// Listener configuration for the host binary.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}
