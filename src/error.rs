use thiserror::Error;

use crate::field::Field;

/// Unified error type for app-meta operations
#[derive(Error, Debug)]
pub enum MetaError {
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidField {
        field: Field,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in app-meta
pub type Result<T> = std::result::Result<T, MetaError>;

impl MetaError {
    /// Create an invalid field error naming the field and the offending raw value
    pub fn invalid(field: Field, value: impl Into<String>, reason: impl Into<String>) -> Self {
        MetaError::InvalidField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        MetaError::Config(msg.into())
    }

    /// Create a format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        MetaError::Format(msg.into())
    }

    /// The field this error is about, if it came from a field parser
    pub fn field(&self) -> Option<Field> {
        match self {
            MetaError::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }
}
