//! Error types for calc-core

use thiserror::Error;

/// Expected input shape, repeated in every malformed-expression message
pub const EXPECTED_SHAPE: &str = "number operator number, with or without spaces.";

/// Calculation errors
///
/// Every variant is user-facing and recoverable: adapters print it or map it
/// to an HTTP status, the core never retries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid format! Use: {}", EXPECTED_SHAPE)]
    MalformedExpression,

    #[error("Operation '{0}' is not supported!")]
    UnsupportedOperation(String),

    #[error("Division by zero is not allowed!")]
    DivisionByZero,

    #[error("Pattern error: {0}")]
    Pattern(String),
}

impl CalcError {
    pub fn unsupported(symbol: impl Into<String>) -> Self {
        Self::UnsupportedOperation(symbol.into())
    }

    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }

    /// Whether the error stems from user input rather than from the engine itself
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Pattern(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Division by zero is not allowed!"
        );
        assert_eq!(
            CalcError::unsupported("%").to_string(),
            "Operation '%' is not supported!"
        );
        assert!(CalcError::MalformedExpression
            .to_string()
            .ends_with("number operator number, with or without spaces."));
    }

    #[test]
    fn test_user_error_classification() {
        assert!(CalcError::DivisionByZero.is_user_error());
        assert!(CalcError::MalformedExpression.is_user_error());
        assert!(!CalcError::pattern("bad").is_user_error());
    }
}
