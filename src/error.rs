//! Error types for field composition

use thiserror::Error;

/// Errors raised while assembling or driving field components
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A field sub-component was built without an enclosing Field
    #[error("field components must be used within a Field")]
    ContextMissing,
    /// An option has neither an explicit value nor display text
    #[error("option {index} has neither a value nor display text")]
    InvalidOptionValue { index: usize },
    /// Two options share an effective value and duplicates are rejected
    #[error("duplicate option value: {value:?}")]
    DuplicateOptionValue { value: String },
    /// A value was requested that no rendered option carries
    #[error("no option with value {value:?}")]
    UnknownOption { value: String },
}

pub type Result<T> = std::result::Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_missing_message() {
        assert_eq!(
            FieldError::ContextMissing.to_string(),
            "field components must be used within a Field"
        );
    }

    #[test]
    fn test_option_errors_carry_details() {
        let err = FieldError::InvalidOptionValue { index: 2 };
        assert!(err.to_string().contains('2'));

        let err = FieldError::UnknownOption {
            value: "400".to_string(),
        };
        assert_eq!(err.to_string(), "no option with value \"400\"");
    }
}
