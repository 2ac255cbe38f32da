//! Exact-path redirect layer.
//!
//! A [`PathResolver`] answers requests whose path appears in a [`Mapping`]
//! with `302 Found`, and hands every other request, untouched, to a fallback
//! service. Mappings come from a literal or from a YAML redirect table:
//!
//! ```yaml
//! - path: /urlshort
//!   url: https://github.com/gophercises/urlshort
//! ```

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::{parse_mapping, ConfigParseError};
pub use http::RedirectServer;
pub use routing::{Mapping, PathResolver, Resolution};

/// Parse a YAML redirect table and wrap it around `fallback`.
///
/// On a parse error no resolver is built.
pub fn yaml_resolver<F>(yaml: &[u8], fallback: F) -> Result<PathResolver<F>, ConfigParseError> {
    let mapping = parse_mapping(yaml)?;
    Ok(PathResolver::new(mapping, fallback))
}
