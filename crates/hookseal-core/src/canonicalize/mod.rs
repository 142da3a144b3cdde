//! Request body canonicalization.
//!
//! The digest claim in a token is computed by the sender over
//! `JSON.stringify(JSON.parse(body), null, 2)`. Incoming bodies are
//! re-serialized the same way before hashing, so formatting differences
//! (whitespace, escapes, number spelling) do not change the digest while any
//! value change does.
//!
//! # Serialization rules
//!
//! - two-space indentation, `": "` between key and value
//! - empty objects and arrays as `{}` / `[]`
//! - object keys in parse order; array-index keys (`"0"`, `"17"`) first, ascending
//! - a duplicated key keeps its first position and its last value
//! - numbers rounded to the nearest binary64, then written as ECMAScript
//!   `Number::toString` (`1e+21`, `1.5e-7`, `-0` as `0`); out-of-range
//!   literals such as `1e400` become `null`
//! - strings escape only `"`, `\` and control characters
//!
//! # Limits
//!
//! Decoded bodies above the configured limit are rejected before parsing.
//! Nesting deeper than 128 levels and lone UTF-16 surrogate escapes are
//! rejected as parse errors.

mod errors;
mod json;

#[cfg(test)]
mod tests;

pub use errors::{CanonicalizeError, CanonicalizeResult, DEFAULT_MAX_BODY_BYTES};
pub use json::{format_number, to_canonical_bytes};

use serde_json::Value;

use crate::base64url;

/// Canonical form of a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalBody(String);

impl CanonicalBody {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CanonicalBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decode a base64 body (either alphabet, padding optional) to text.
pub fn decode_body(body_b64: &str, max_bytes: usize) -> CanonicalizeResult<String> {
    let bytes = base64url::decode(body_b64).map_err(|e| CanonicalizeError::InvalidEncoding {
        message: e.to_string(),
    })?;
    if bytes.len() > max_bytes {
        return Err(CanonicalizeError::BodyTooLarge {
            size: bytes.len(),
            limit: max_bytes,
        });
    }
    String::from_utf8(bytes).map_err(|e| CanonicalizeError::InvalidUtf8 {
        message: e.to_string(),
    })
}

/// Canonicalize JSON text.
pub fn canonicalize_text(text: &str) -> CanonicalizeResult<CanonicalBody> {
    let value: Value = serde_json::from_str(text).map_err(|e| CanonicalizeError::ParseError {
        message: e.to_string(),
    })?;
    let bytes = to_canonical_bytes(&value)?;
    String::from_utf8(bytes)
        .map(CanonicalBody)
        .map_err(|e| CanonicalizeError::SerializeError {
            message: e.to_string(),
        })
}

/// Decode and canonicalize a base64 request body.
pub fn canonical_body(body_b64: &str, max_bytes: usize) -> CanonicalizeResult<CanonicalBody> {
    let text = decode_body(body_b64, max_bytes)?;
    canonicalize_text(&text)
}
