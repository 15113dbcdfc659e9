//! Input validation utilities
//!
//! Pre-flight checks shared by the client and the resource services. None of
//! these touch the network; the server remains responsible for everything
//! beyond presence and positivity.

use crate::error::{AppError, ConfigError};
use url::Url;

/// Parse and normalize a base URL.
///
/// The result always ends with a path separator so relative API paths can be
/// appended directly. Only `http` and `https` are accepted.
pub fn parse_base_url(raw: &str) -> crate::Result<Url> {
    if raw.trim().is_empty() {
        return Err(ConfigError::MissingField {
            field: "base_url".to_string(),
        }
        .into());
    }

    let normalized = format!("{}/", raw.trim().trim_end_matches('/'));
    let url = Url::parse(&normalized).map_err(|source| AppError::InvalidUrl {
        url: normalized.clone(),
        source,
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: raw.to_string(),
            reason: format!("invalid scheme '{}': must be http or https", url.scheme()),
        }
        .into());
    }

    Ok(url)
}

/// Reject empty or whitespace-only identifiers.
pub fn require_non_blank(field: &str, value: &str) -> crate::Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(field, "cannot be empty"));
    }
    Ok(())
}

/// Reject identifiers that would not stay a single URL path segment.
///
/// URL parsing treats `/` and `\` as separators, `?` and `#` as the start of
/// the query and fragment, and resolves `.` and `..` (also percent-encoded)
/// against the preceding path.
pub fn require_path_segment(field: &str, value: &str) -> crate::Result<()> {
    require_non_blank(field, value)?;

    if value.contains(['/', '\\', '?', '#']) {
        return Err(AppError::validation(
            field,
            "cannot contain '/', '\\', '?' or '#'",
        ));
    }

    let decoded_dots = value.to_ascii_lowercase().replace("%2e", ".");
    if decoded_dots == "." || decoded_dots == ".." {
        return Err(AppError::validation(field, "cannot be '.' or '..'"));
    }
    Ok(())
}

pub fn require_positive_id(field: &str, id: i64) -> crate::Result<()> {
    if id <= 0 {
        return Err(AppError::validation(field, "must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_accepts_valid_urls() {
        let url = parse_base_url("http://localhost:8080").expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/");

        let url = parse_base_url("https://api.example.com/nebula").expect("valid url");
        assert_eq!(url.as_str(), "https://api.example.com/nebula/");
    }

    #[test]
    fn test_parse_base_url_collapses_trailing_slashes() {
        let url = parse_base_url("http://localhost:8080/base//").expect("valid url");
        assert_eq!(url.as_str(), "http://localhost:8080/base/");
    }

    #[test]
    fn test_parse_base_url_rejects_invalid_urls() {
        assert!(matches!(
            parse_base_url(""),
            Err(AppError::Config(ConfigError::MissingField { .. }))
        ));
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(AppError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(parse_base_url("localhost:8080").is_err());
        assert!(matches!(
            parse_base_url("not a url"),
            Err(AppError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("db_name", "inventory").is_ok());
        assert!(require_non_blank("db_name", "").is_err());
        match require_non_blank("table_name", "   ") {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "table_name"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_require_path_segment() {
        assert!(require_path_segment("db_name", "inventory").is_ok());
        assert!(require_path_segment("db_name", "v1.2").is_ok());
        assert!(require_path_segment("db_name", "...").is_ok());
        assert!(require_path_segment("db_name", " ").is_err());

        for bad in [".", "..", "%2e", "%2E%2e", ".%2E", "a/b", "a\\b", "a?b", "a#b"] {
            match require_path_segment("db_name", bad) {
                Err(AppError::Validation { field, .. }) => assert_eq!(field, "db_name"),
                other => panic!("Expected Validation error for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_require_positive_id() {
        assert!(require_positive_id("record_id", 1).is_ok());
        assert!(require_positive_id("record_id", 0).is_err());
        assert!(require_positive_id("record_id", -7).is_err());
    }
}
