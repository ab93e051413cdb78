//! Destination URL validation
//!
//! Checks destination URLs the way a browser's `type="url"` constraint
//! would, plus a blocklist of schemes that must never be redirect targets.

use url::Url;

/// URL validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    Empty,
    UnsupportedScheme(String),
    DangerousScheme(String),
    Malformed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL cannot be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported scheme: {}. Only http:// and https:// are allowed",
                scheme
            ),
            Self::DangerousScheme(scheme) => {
                write!(f, "Dangerous scheme blocked: {}", scheme)
            }
            Self::Malformed(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Schemes that must never become redirect destinations
const DANGEROUS_SCHEMES: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// Validate a destination URL.
///
/// Checks, in order:
/// 1. the URL is not empty
/// 2. the scheme is not on the blocklist (javascript:, data:, file:, ...)
/// 3. the scheme is http:// or https://
/// 4. the URL parses
pub fn validate_url(raw: &str) -> Result<(), UrlValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let lower = raw.to_lowercase();

    for scheme in DANGEROUS_SCHEMES {
        if lower.starts_with(scheme) {
            return Err(UrlValidationError::DangerousScheme(
                scheme.trim_end_matches(':').to_string(),
            ));
        }
    }

    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        let scheme = lower.split(':').next().unwrap_or("").to_string();
        return Err(UrlValidationError::UnsupportedScheme(scheme));
    }

    Url::parse(raw).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://example.com/path?q=1").is_ok());
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        assert!(matches!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::DangerousScheme(_))
        ));
        assert!(matches!(
            validate_url("DATA:text/html,hi"),
            Err(UrlValidationError::DangerousScheme(_))
        ));
        assert!(matches!(
            validate_url("file:///etc/passwd"),
            Err(UrlValidationError::DangerousScheme(_))
        ));
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            validate_url("example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            validate_url("http://"),
            Err(UrlValidationError::Malformed(_))
        ));
    }
}
