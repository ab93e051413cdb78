use linkboard::utils::url_validator::{UrlValidationError, validate_url};

#[test]
fn test_accepts_standard_destinations() {
    assert!(validate_url("https://example.com").is_ok());
    assert!(validate_url("http://localhost:8080/path").is_ok());
    assert!(validate_url("https://example.com/a/b?c=d#e").is_ok());
}

#[test]
fn test_empty_destination() {
    assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
    assert_eq!(validate_url("\t  "), Err(UrlValidationError::Empty));
}

#[test]
fn test_dangerous_schemes_are_named_in_the_error() {
    let err = validate_url("javascript:alert(1)").unwrap_err();
    assert!(matches!(err, UrlValidationError::DangerousScheme(_)));
    assert!(err.to_string().contains("javascript"));

    let err = validate_url("data:text/html,<h1>").unwrap_err();
    assert!(err.to_string().contains("data"));
}

#[test]
fn test_non_http_schemes_rejected() {
    let err = validate_url("ftp://example.com").unwrap_err();
    assert!(matches!(err, UrlValidationError::UnsupportedScheme(_)));
    assert!(err.to_string().contains("Only http:// and https://"));
}

#[test]
fn test_scheme_check_is_case_insensitive() {
    assert!(validate_url("HTTPS://example.com").is_ok());
    assert!(matches!(
        validate_url("JavaScript:alert(1)"),
        Err(UrlValidationError::DangerousScheme(_))
    ));
}

#[test]
fn test_malformed_urls_rejected() {
    assert!(matches!(
        validate_url("http://"),
        Err(UrlValidationError::Malformed(_))
    ));
}
