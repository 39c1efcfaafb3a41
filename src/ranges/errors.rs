use thiserror::Error;

/// Errors that can occur while reading ranges from input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Input contains no ranges")]
    EmptyInput,
    #[error("Invalid range format: '{0}' (expected <from>-<to>)")]
    InvalidFormat(String),
    #[error("Invalid number '{value}' in range '{token}'")]
    InvalidNumber { token: String, value: String },
}
