//! Register Codec Error Types
//!
//! Decode and encode failures are local to a single conversion call and
//! carry enough context for the caller to reject the read or write.

use crate::data_type::DataType;
use thiserror::Error;

/// Result type for voltage-regcodec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Failure to turn bytes into a typed value
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer shorter than the width of the requested type
    #[error("Buffer too short for {data_type}: need {required} bytes, got {actual}")]
    BufferTooShort {
        data_type: DataType,
        required: usize,
        actual: usize,
    },

    /// String target with invalid UTF-8
    #[error("Invalid UTF-8 text: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Failure to turn operator text into bytes
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Text does not parse as the target type
    #[error("Cannot parse '{text}' as {data_type}: {reason}")]
    Parse {
        data_type: DataType,
        text: String,
        reason: String,
    },
}

impl EncodeError {
    pub fn parse(data_type: DataType, text: impl Into<String>, reason: impl ToString) -> Self {
        EncodeError::Parse {
            data_type,
            text: text.into(),
            reason: reason.to_string(),
        }
    }
}

/// Register codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Register field definition or placement errors
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

impl From<figment::Error> for CodecError {
    fn from(err: figment::Error) -> Self {
        CodecError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl CodecError {
    pub fn config(msg: impl Into<String>) -> Self {
        CodecError::Config(msg.into())
    }

    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error came from bad operator input rather than device data
    pub fn is_input_error(&self) -> bool {
        matches!(self, CodecError::Encode(_))
    }
}
