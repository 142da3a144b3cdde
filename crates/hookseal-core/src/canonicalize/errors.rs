//! Body canonicalization errors and limits.

use crate::error::VerifyError;

/// Default decoded body limit (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1_024 * 1_024;

/// Errors specific to body canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalizeError {
    /// Body is not valid base64 in either alphabet.
    InvalidEncoding { message: String },

    /// Decoded body exceeds the configured limit.
    BodyTooLarge { size: usize, limit: usize },

    /// Decoded body is not UTF-8.
    InvalidUtf8 { message: String },

    /// Decoded body is not a JSON document.
    ParseError { message: String },

    /// JSON serialization error.
    SerializeError { message: String },
}

impl std::fmt::Display for CanonicalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEncoding { message } => write!(f, "body is not base64: {}", message),
            Self::BodyTooLarge { size, limit } => {
                write!(f, "body size {} exceeds limit {}", size, limit)
            }
            Self::InvalidUtf8 { message } => write!(f, "body is not UTF-8: {}", message),
            Self::ParseError { message } => write!(f, "body JSON parse error: {}", message),
            Self::SerializeError { message } => write!(f, "JSON serialize error: {}", message),
        }
    }
}

impl std::error::Error for CanonicalizeError {}

/// Result type for canonicalization operations.
pub type CanonicalizeResult<T> = Result<T, CanonicalizeError>;

impl From<CanonicalizeError> for VerifyError {
    fn from(err: CanonicalizeError) -> Self {
        VerifyError::malformed_body(err.to_string())
    }
}
