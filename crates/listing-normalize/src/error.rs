//! Error types for normalizer construction.

use thiserror::Error;

/// Errors raised while building a normalizer.
///
/// Normalizing text never fails; only an invalid pattern does.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The supplied regular expression does not compile.
    #[error("invalid normalizer pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type for normalizer construction.
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_pattern() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = NormalizeError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid normalizer pattern '('"));
    }
}
