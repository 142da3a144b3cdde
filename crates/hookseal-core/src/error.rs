//! Error types for the verification pipeline.

use crate::outcome::Reason;

/// Verification errors.
///
/// Every variant except [`VerifyError::Internal`] is an expected, validated
/// outcome. The `detail` strings are meant for logs and are never sent back
/// to the caller for 500-class outcomes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// Token, public key or body absent from the request.
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    /// Token is not three decodable segments with JSON header and payload.
    #[error("malformed token: {detail}")]
    MalformedToken { detail: String },

    /// Header declares an algorithm other than ES256.
    #[error("unsupported algorithm: {alg}")]
    UnsupportedAlgorithm { alg: String },

    /// Public key material could not be turned into a P-256 key.
    #[error("invalid key material: {detail}")]
    InvalidKeyMaterial { detail: String },

    /// Signature does not verify against the supplied key.
    #[error("signature verification failed")]
    InvalidSignature,

    /// Body could not be decoded or parsed as JSON.
    #[error("malformed body: {detail}")]
    MalformedBody { detail: String },

    /// Canonical body digest differs from the signed claim.
    #[error("body hash mismatch: expected {expected}, got {actual}")]
    BodyHashMismatch { expected: String, actual: String },

    /// Anything the pipeline did not anticipate.
    #[error("internal error: {detail}")]
    Internal { detail: String },
}

impl VerifyError {
    /// Outcome reason for this error.
    pub fn reason(&self) -> Reason {
        match self {
            Self::MissingField { .. } => Reason::MissingField,
            Self::MalformedToken { .. } => Reason::MalformedToken,
            Self::UnsupportedAlgorithm { .. } => Reason::UnsupportedAlgorithm,
            Self::InvalidKeyMaterial { .. } => Reason::InvalidKeyMaterial,
            Self::InvalidSignature => Reason::InvalidSignature,
            Self::MalformedBody { .. } => Reason::MalformedBody,
            Self::BodyHashMismatch { .. } => Reason::BodyHashMismatch,
            Self::Internal { .. } => Reason::InternalError,
        }
    }

    /// HTTP status class.
    pub fn http_status(&self) -> u16 {
        self.reason().http_status()
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        self.reason().exit_code()
    }

    /// Whether the error is retryable.
    ///
    /// Verification failures are never transient.
    pub fn is_retryable(&self) -> bool {
        false
    }

    pub(crate) fn malformed_token(detail: impl Into<String>) -> Self {
        Self::MalformedToken {
            detail: detail.into(),
        }
    }

    pub(crate) fn invalid_key(detail: impl Into<String>) -> Self {
        Self::InvalidKeyMaterial {
            detail: detail.into(),
        }
    }

    pub(crate) fn malformed_body(detail: impl Into<String>) -> Self {
        Self::MalformedBody {
            detail: detail.into(),
        }
    }
}

/// Result type for verification stages.
pub type VerifyResult<T> = Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(
            VerifyError::MissingField { field: "token" }.http_status(),
            400
        );
        assert_eq!(VerifyError::malformed_token("x").http_status(), 400);
        assert_eq!(
            VerifyError::UnsupportedAlgorithm { alg: "none".into() }.http_status(),
            400
        );
        assert_eq!(VerifyError::malformed_body("x").http_status(), 400);
        assert_eq!(VerifyError::InvalidSignature.http_status(), 401);
        assert_eq!(
            VerifyError::BodyHashMismatch {
                expected: "a".into(),
                actual: "b".into()
            }
            .http_status(),
            401
        );
        assert_eq!(VerifyError::invalid_key("x").http_status(), 500);
        assert_eq!(
            VerifyError::Internal { detail: "x".into() }.http_status(),
            500
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(VerifyError::malformed_token("x").exit_code(), 1);
        assert_eq!(VerifyError::invalid_key("x").exit_code(), 3);
        assert_eq!(VerifyError::InvalidSignature.exit_code(), 4);
    }

    #[test]
    fn test_never_retryable() {
        assert!(!VerifyError::InvalidSignature.is_retryable());
        assert!(!VerifyError::Internal { detail: "x".into() }.is_retryable());
    }
}
