//! Error types for the Lehmer generators
//!
//! Draws and reseeds never fail. Errors only surface at the boundaries where
//! a caller hands the crate a value it cannot accept: a non-positive bound,
//! a restored state outside `[0, m)`, or malformed configuration.

use thiserror::Error;

/// Errors reported at the call boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// An argument violated a documented precondition
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl RngError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        RngError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RngError {
    fn from(err: serde_json::Error) -> Self {
        RngError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_argument() {
        let err = RngError::invalid_argument("k", "must be positive, got 0");
        assert_eq!(
            format!("{}", err),
            "Invalid argument 'k': must be positive, got 0"
        );
    }

    #[test]
    fn test_display_config() {
        let err = RngError::Config("missing field `kind`".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: missing field `kind`"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err: RngError = json_err.into();
        assert!(matches!(err, RngError::Config(_)));
    }
}
