//! Redirect table loading.
//!
//! [`parse_mapping`] is pure: bytes in, [`Mapping`] out. [`load_mapping`] adds
//! file reading and validation for the host binary.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RedirectRecord;
use crate::config::validation::{validate_mapping, ValidationError};
use crate::routing::Mapping;

/// The redirect table is not well-formed YAML of the expected shape.
#[derive(Debug, Error)]
#[error("invalid redirect configuration: {source}")]
pub struct ConfigParseError {
    #[from]
    source: serde_yaml::Error,
}

impl ConfigParseError {
    /// One-based line and column of the violation, when known.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.source.location().map(|loc| (loc.line(), loc.column()))
    }
}

/// Error type for loading the redirect table from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ConfigParseError),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a YAML list of `{path, url}` records into a [`Mapping`].
///
/// Records are folded in source order, so a repeated `path` takes the `url`
/// of its last occurrence. Empty input and a null document (`~`, `null`) are
/// an empty table.
/// Empty fields are kept as-is; see [`validate_mapping`].
pub fn parse_mapping(bytes: &[u8]) -> Result<Mapping, ConfigParseError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Mapping::new());
    }

    let records: Vec<RedirectRecord> =
        serde_yaml::from_slice::<Option<_>>(bytes)?.unwrap_or_default();
    let total = records.len();

    let mapping: Mapping = records
        .into_iter()
        .map(|record| (record.path, record.url))
        .collect();

    if mapping.len() < total {
        tracing::debug!(
            records = total,
            unique_paths = mapping.len(),
            "Duplicate paths in redirect table, later records win"
        );
    }

    Ok(mapping)
}

/// Read, parse and validate a redirect table file.
pub fn load_mapping(path: &Path) -> Result<Mapping, ConfigError> {
    let content = fs::read(path)?;
    let mapping = parse_mapping(&content)?;

    validate_mapping(&mapping).map_err(ConfigError::Validation)?;

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOPHERCISES: &str = "\
- path: /urlshort
  url: https://github.com/gophercises/urlshort
- path: /urlshort-final
  url: https://github.com/gophercises/urlshort/tree/solution
";

    #[test]
    fn test_parse_gophercises_table() {
        let mapping = parse_mapping(GOPHERCISES.as_bytes()).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.get("/urlshort"),
            Some("https://github.com/gophercises/urlshort")
        );
        assert_eq!(
            mapping.get("/urlshort-final"),
            Some("https://github.com/gophercises/urlshort/tree/solution")
        );
    }

    #[test]
    fn test_duplicate_path_takes_later_url() {
        let yaml = "\
- path: /dup
  url: https://first.example
- path: /other
  url: https://other.example
- path: /dup
  url: https://second.example
";
        let mapping = parse_mapping(yaml.as_bytes()).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("/dup"), Some("https://second.example"));
    }

    #[test]
    fn test_missing_and_unknown_fields() {
        let yaml = "\
- path: /only-path
- url: https://only-url.example
- path: /extra
  url: https://extra.example
  note: ignored
";
        let mapping = parse_mapping(yaml.as_bytes()).unwrap();

        assert_eq!(mapping.get("/only-path"), Some(""));
        assert_eq!(mapping.get(""), Some("https://only-url.example"));
        assert_eq!(mapping.get("/extra"), Some("https://extra.example"));
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        assert!(parse_mapping(b"").unwrap().is_empty());
        assert!(parse_mapping(b"  \n\t\n").unwrap().is_empty());
        assert!(parse_mapping(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_null_document_is_empty_table() {
        assert!(parse_mapping(b"~\n").unwrap().is_empty());
        assert!(parse_mapping(b"null").unwrap().is_empty());
        assert!(parse_mapping(b"---\n~\n").unwrap().is_empty());
    }

    #[test]
    fn test_flow_style_records() {
        let yaml = "[{path: /a, url: 'https://a.example'}, {url: /b-target, path: /b}]";
        let mapping = parse_mapping(yaml.as_bytes()).unwrap();

        assert_eq!(mapping.get("/a"), Some("https://a.example"));
        assert_eq!(mapping.get("/b"), Some("/b-target"));
    }

    #[test]
    fn test_unterminated_structure_fails() {
        let err = parse_mapping(b"- {path: /a, url: 'https://a.example'\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid redirect configuration"));
        assert!(err.location().is_some());
    }

    #[test]
    fn test_wrong_shape_fails() {
        // Top level must be a sequence.
        assert!(parse_mapping(b"path: /a\nurl: https://a.example\n").is_err());

        // Field values must be strings.
        assert!(parse_mapping(b"- path: /a\n  url:\n    nested: value\n").is_err());
    }

    #[test]
    fn test_load_mapping_reports_io_error() {
        let err = load_mapping(Path::new("/nonexistent/redirects.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
