//! Verification outcome and its wire form.

use serde::{Deserialize, Serialize};

use crate::error::VerifyError;

/// Machine-checkable reason attached to every outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Accepted,
    MissingField,
    MalformedToken,
    UnsupportedAlgorithm,
    InvalidKeyMaterial,
    InvalidSignature,
    MalformedBody,
    BodyHashMismatch,
    InternalError,
}

impl Reason {
    /// HTTP status class for the reason.
    pub fn http_status(self) -> u16 {
        match self {
            Self::Accepted => 200,
            Self::MissingField
            | Self::MalformedToken
            | Self::UnsupportedAlgorithm
            | Self::MalformedBody => 400,
            Self::InvalidSignature | Self::BodyHashMismatch => 401,
            Self::InvalidKeyMaterial | Self::InternalError => 500,
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Accepted => 0,
            Self::MissingField
            | Self::MalformedToken
            | Self::UnsupportedAlgorithm
            | Self::MalformedBody => 1,
            Self::InvalidKeyMaterial | Self::InternalError => 3,
            Self::InvalidSignature | Self::BodyHashMismatch => 4,
        }
    }

    /// Caller-facing message.
    ///
    /// 500-class reasons share one message so no internal detail leaks.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Accepted => None,
            Self::MissingField => Some("Missing token, publicKey, or body"),
            Self::MalformedToken => Some("Malformed JWT"),
            Self::UnsupportedAlgorithm => Some("Unsupported JWT algorithm"),
            Self::InvalidSignature => Some("Invalid JWT signature"),
            Self::MalformedBody => Some("Malformed request body"),
            Self::BodyHashMismatch => Some("Request body hash mismatch"),
            Self::InvalidKeyMaterial | Self::InternalError => Some("Verification failed"),
        }
    }

    /// Stable snake_case code, as serialized.
    pub fn code(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::MissingField => "missing_field",
            Self::MalformedToken => "malformed_token",
            Self::UnsupportedAlgorithm => "unsupported_algorithm",
            Self::InvalidKeyMaterial => "invalid_key_material",
            Self::InvalidSignature => "invalid_signature",
            Self::MalformedBody => "malformed_body",
            Self::BodyHashMismatch => "body_hash_mismatch",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of one verification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerificationOutcome {
    pub valid: bool,
    pub reason: Reason,
    pub http_status: u16,
}

impl VerificationOutcome {
    pub fn accepted() -> Self {
        Self::from_reason(Reason::Accepted)
    }

    pub fn rejected(err: &VerifyError) -> Self {
        Self::from_reason(err.reason())
    }

    fn from_reason(reason: Reason) -> Self {
        Self {
            valid: reason == Reason::Accepted,
            reason,
            http_status: reason.http_status(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.valid
    }

    /// JSON body sent back to the caller.
    pub fn to_response(&self) -> VerifyResponse {
        VerifyResponse {
            valid: self.valid,
            reason: self.reason.message().map(str::to_string),
            code: (!self.valid).then_some(self.reason),
        }
    }
}

/// Wire response `{ valid, reason?, code? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Reason>,
}
