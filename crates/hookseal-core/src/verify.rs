//! Verification pipeline.
//!
//! Stages run in a fixed order and the first failure decides the outcome:
//!
//! 1. required fields present
//! 2. token decoded, `alg` checked
//! 3. signature re-encoded to DER
//! 4. key parsed, signature verified
//! 5. body canonicalized, digest compared with the signed claim

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::VerifierConfig;
use crate::der;
use crate::digest;
use crate::error::{VerifyError, VerifyResult};
use crate::key::PublicKeyMaterial;
use crate::observer::{DigestReport, TracingObserver, VerifyObserver};
use crate::outcome::VerificationOutcome;
use crate::signature;
use crate::token;

/// Logical verification request.
///
/// Fields are optional so that absence is reported as an outcome rather than
/// a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Compact ES256 token.
    #[serde(default, alias = "jwt", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Base64 of the signer's JWK.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    /// Base64 of the request body.
    #[serde(default, alias = "rawBody", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl VerifyRequest {
    pub fn new(
        token: impl Into<String>,
        public_key: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            token: Some(token.into()),
            public_key: Some(public_key.into()),
            body: Some(body.into()),
        }
    }
}

/// Stateless verifier; share it behind an `Arc`.
pub struct Verifier {
    config: VerifierConfig,
    observer: Arc<dyn VerifyObserver>,
}

impl Verifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self {
            config,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the default tracing observer.
    pub fn with_observer(mut self, observer: Arc<dyn VerifyObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Run the pipeline once.
    ///
    /// Never panics: unexpected faults become an internal-error outcome.
    pub fn verify(&self, request: &VerifyRequest) -> VerificationOutcome {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.run_pipeline(request)))
            .unwrap_or_else(|payload| {
                Err(VerifyError::Internal {
                    detail: panic_message(payload.as_ref()),
                })
            });

        let outcome = match &result {
            Ok(()) => VerificationOutcome::accepted(),
            Err(err) => VerificationOutcome::rejected(err),
        };
        self.notify_outcome(&outcome, result.as_ref().err());
        outcome
    }

    // The outcome is already decided; a faulty observer must not unwind
    // into the caller.
    fn notify_outcome(&self, outcome: &VerificationOutcome, error: Option<&VerifyError>) {
        let notified = panic::catch_unwind(AssertUnwindSafe(|| {
            self.observer.on_outcome(outcome, error)
        }));
        if let Err(payload) = notified {
            tracing::error!(
                code = outcome.reason.code(),
                panic = %panic_message(payload.as_ref()),
                "verification observer panicked"
            );
        }
    }

    /// Convenience for callers holding the three fields directly.
    pub fn verify_parts(&self, token: &str, public_key: &str, body: &str) -> VerificationOutcome {
        self.verify(&VerifyRequest::new(token, public_key, body))
    }

    fn run_pipeline(&self, request: &VerifyRequest) -> VerifyResult<()> {
        let (token, public_key, body) = required_fields(request)?;

        let decoded = token::decode(token)?;
        let standard = der::to_standard_encoding(&decoded.raw_signature);

        let key = PublicKeyMaterial::from_base64(public_key)?.verifying_key()?;
        if !signature::verify(decoded.signing_input.as_bytes(), &standard, &key) {
            return Err(VerifyError::InvalidSignature);
        }

        let actual = digest::actual_digest(body, self.config.max_body_bytes)?;
        let expected = digest::expected_digest(&decoded, &self.config.digest_claim);
        self.observer.on_digest(&DigestReport {
            expected,
            actual: &actual.hex,
            canonical_body: self
                .config
                .log_canonical_body
                .then_some(&actual.canonical),
        });
        digest::check_digest(expected, &actual.hex)
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new(VerifierConfig::default())
    }
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Verify with default configuration and the tracing observer.
pub fn verify_request(request: &VerifyRequest) -> VerificationOutcome {
    Verifier::default().verify(request)
}

fn required_fields(request: &VerifyRequest) -> VerifyResult<(&str, &str, &str)> {
    let token = match request.token.as_deref() {
        Some(token) if !token.is_empty() => token,
        _ => return Err(VerifyError::MissingField { field: "token" }),
    };
    let public_key = match request.public_key.as_deref() {
        Some(key) if !key.is_empty() => key,
        _ => return Err(VerifyError::MissingField { field: "publicKey" }),
    };
    // An empty body is present; it fails later as malformed.
    let body = request
        .body
        .as_deref()
        .ok_or(VerifyError::MissingField { field: "body" })?;
    Ok((token, public_key, body))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during verification".to_string()
    }
}
