//! Error types for recstore core.

use recstore_codec::{CodecError, Value};
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in record store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Codec error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// No record matched the update or remove target.
    #[error("no record matches {target}")]
    NotFound {
        /// Description of what was looked for.
        target: String,
    },

    /// Criteria field name is empty or malformed.
    #[error("invalid criteria: {message}")]
    InvalidCriteria {
        /// Description of the problem.
        message: String,
    },

    /// Identifier value is already taken by another record.
    #[error("duplicate identifier {field}={value}")]
    DuplicateIdentifier {
        /// The identifier field.
        field: String,
        /// The clashing value.
        value: Value,
    },

    /// Record does not carry the identifier field.
    #[error("record is missing identifier field {field:?}")]
    MissingIdentifier {
        /// The identifier field.
        field: String,
    },

    /// Store configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },
}

impl CoreError {
    /// Creates a not found error.
    pub fn not_found(target: impl Into<String>) -> Self {
        Self::NotFound {
            target: target.into(),
        }
    }

    /// Creates an invalid criteria error.
    pub fn invalid_criteria(message: impl Into<String>) -> Self {
        Self::InvalidCriteria {
            message: message.into(),
        }
    }

    /// Creates a duplicate identifier error.
    pub fn duplicate_identifier(field: impl Into<String>, value: Value) -> Self {
        Self::DuplicateIdentifier {
            field: field.into(),
            value,
        }
    }

    /// Creates a missing identifier error.
    pub fn missing_identifier(field: impl Into<String>) -> Self {
        Self::MissingIdentifier {
            field: field.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by a missing target record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CoreError::duplicate_identifier("id", Value::Integer(1001)).to_string(),
            "duplicate identifier id=1001"
        );
        assert_eq!(
            CoreError::not_found("CustomerId=7").to_string(),
            "no record matches CustomerId=7"
        );
        assert_eq!(
            CoreError::missing_identifier("id").to_string(),
            "record is missing identifier field \"id\""
        );
    }

    #[test]
    fn codec_errors_convert() {
        let err: CoreError = CodecError::NonFiniteFloat.into();
        assert!(matches!(err, CoreError::Codec(CodecError::NonFiniteFloat)));
        assert!(!err.is_not_found());
    }
}
