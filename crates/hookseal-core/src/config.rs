//! Verifier configuration.

use serde::{Deserialize, Serialize};

use crate::canonicalize::DEFAULT_MAX_BODY_BYTES;
use crate::digest::DEFAULT_DIGEST_CLAIM;

pub const ENV_DIGEST_CLAIM: &str = "HOOKSEAL_DIGEST_CLAIM";
pub const ENV_MAX_BODY_BYTES: &str = "HOOKSEAL_MAX_BODY_BYTES";
pub const ENV_LOG_CANONICAL_BODY: &str = "HOOKSEAL_LOG_CANONICAL_BODY";

/// Settings for a [`crate::Verifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Payload claim holding the body digest.
    #[serde(default = "default_digest_claim")]
    pub digest_claim: String,

    /// Decoded body size limit in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Log the canonical body at `debug` level.
    #[serde(default)]
    pub log_canonical_body: bool,
}

fn default_digest_claim() -> String {
    DEFAULT_DIGEST_CLAIM.to_string()
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            digest_claim: default_digest_claim(),
            max_body_bytes: default_max_body_bytes(),
            log_canonical_body: false,
        }
    }
}

impl VerifierConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `HOOKSEAL_DIGEST_CLAIM` | Payload claim holding the body digest |
    /// | `HOOKSEAL_MAX_BODY_BYTES` | Decoded body size limit |
    /// | `HOOKSEAL_LOG_CANONICAL_BODY` | Log canonical body at debug level |
    ///
    /// Invalid values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(claim) = lookup(ENV_DIGEST_CLAIM) {
            let claim = claim.trim();
            if claim.is_empty() {
                tracing::warn!(var = ENV_DIGEST_CLAIM, "empty value ignored");
            } else {
                config.digest_claim = claim.to_string();
            }
        }

        if let Some(raw) = lookup(ENV_MAX_BODY_BYTES) {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.max_body_bytes = limit,
                _ => tracing::warn!(var = ENV_MAX_BODY_BYTES, value = %raw, "invalid value ignored"),
            }
        }

        if let Some(raw) = lookup(ENV_LOG_CANONICAL_BODY) {
            match parse_flag(&raw) {
                Some(flag) => config.log_canonical_body = flag,
                None => {
                    tracing::warn!(var = ENV_LOG_CANONICAL_BODY, value = %raw, "invalid value ignored")
                }
            }
        }

        config
    }

    /// Set the digest claim name.
    pub fn with_digest_claim(mut self, claim: impl Into<String>) -> Self {
        self.digest_claim = claim.into();
        self
    }

    /// Set the decoded body limit.
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Log canonical bodies.
    pub fn with_log_canonical_body(mut self, enabled: bool) -> Self {
        self.log_canonical_body = enabled;
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") || value.eq_ignore_ascii_case("no")
    {
        Some(false)
    } else {
        None
    }
}
