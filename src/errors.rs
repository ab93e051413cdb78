use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkboardError {
    Validation(String),
    NotFound(String),
}

impl LinkboardError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        LinkboardError::Validation(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LinkboardError::NotFound(msg.into())
    }

    /// Human-readable category name
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkboardError::Validation(_) => "Validation Error",
            LinkboardError::NotFound(_) => "Resource Not Found",
        }
    }

    /// Error detail message
    pub fn message(&self) -> &str {
        match self {
            LinkboardError::Validation(msg) => msg,
            LinkboardError::NotFound(msg) => msg,
        }
    }
}

impl fmt::Display for LinkboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for LinkboardError {}

pub type Result<T> = std::result::Result<T, LinkboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = LinkboardError::validation("slug already exists");

        assert!(matches!(error, LinkboardError::Validation(_)));
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("slug already exists"));
    }

    #[test]
    fn test_not_found_error() {
        let error = LinkboardError::not_found("no such slug");

        assert!(matches!(error, LinkboardError::NotFound(_)));
        assert!(error.to_string().contains("Resource Not Found"));
        assert!(error.to_string().contains("no such slug"));
    }

    #[test]
    fn test_error_accessors() {
        let error = LinkboardError::validation("bad input");
        assert_eq!(error.error_type(), "Validation Error");
        assert_eq!(error.message(), "bad input");
    }
}
