//! Verification observers.
//!
//! The verifier reports what it computed through a [`VerifyObserver`]
//! instead of logging directly, so hosts decide where diagnostics go.

use crate::canonicalize::CanonicalBody;
use crate::error::VerifyError;
use crate::outcome::VerificationOutcome;

/// Digest comparison details, reported once the body has been hashed.
#[derive(Debug, Clone, Copy)]
pub struct DigestReport<'a> {
    pub expected: Option<&'a str>,
    pub actual: &'a str,
    /// Set only when canonical body logging is enabled.
    pub canonical_body: Option<&'a CanonicalBody>,
}

/// Trait for observing verification calls.
pub trait VerifyObserver: Send + Sync {
    /// Body digests were computed.
    fn on_digest(&self, report: &DigestReport<'_>);

    /// A call finished. `error` is set for every rejection.
    fn on_outcome(&self, outcome: &VerificationOutcome, error: Option<&VerifyError>);
}

/// Observer emitting `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl VerifyObserver for TracingObserver {
    fn on_digest(&self, report: &DigestReport<'_>) {
        tracing::debug!(
            expected = report.expected.unwrap_or("<missing>"),
            actual = report.actual,
            "body digest computed"
        );
        if let Some(body) = report.canonical_body {
            tracing::debug!(canonical_body = %body, "canonical body");
        }
    }

    fn on_outcome(&self, outcome: &VerificationOutcome, error: Option<&VerifyError>) {
        match error {
            None => tracing::info!(
                valid = outcome.valid,
                code = outcome.reason.code(),
                status = outcome.http_status,
                "verification accepted"
            ),
            Some(err) if outcome.http_status >= 500 => tracing::error!(
                valid = outcome.valid,
                code = outcome.reason.code(),
                status = outcome.http_status,
                error = %err,
                "verification failed"
            ),
            Some(err) => tracing::info!(
                valid = outcome.valid,
                code = outcome.reason.code(),
                status = outcome.http_status,
                error = %err,
                "verification rejected"
            ),
        }
    }
}

/// Null observer for testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl VerifyObserver for NullObserver {
    fn on_digest(&self, _report: &DigestReport<'_>) {}

    fn on_outcome(&self, _outcome: &VerificationOutcome, _error: Option<&VerifyError>) {}
}
