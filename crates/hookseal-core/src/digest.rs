//! Body digest: expected (signed claim) vs actual (canonical body).

use sha2::{Digest, Sha256};

use crate::canonicalize::{canonical_body, CanonicalBody};
use crate::error::{VerifyError, VerifyResult};
use crate::token::DecodedToken;

/// Default payload claim holding the body digest.
pub const DEFAULT_DIGEST_CLAIM: &str = "request_body_sha256";

/// SHA-256 as lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Digest claimed by the token, if the claim is a string.
pub fn expected_digest<'a>(token: &'a DecodedToken, claim: &str) -> Option<&'a str> {
    token.claim_str(claim)
}

/// Canonical body and its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyDigest {
    pub canonical: CanonicalBody,
    pub hex: String,
}

/// Decode, canonicalize and hash a base64 body.
pub fn actual_digest(body_b64: &str, max_bytes: usize) -> VerifyResult<BodyDigest> {
    let canonical = canonical_body(body_b64, max_bytes)?;
    let hex = sha256_hex(canonical.as_bytes());
    Ok(BodyDigest { canonical, hex })
}

/// Case-sensitive comparison of claimed and computed digests.
///
/// A missing claim cannot match any body.
pub fn check_digest(expected: Option<&str>, actual: &str) -> VerifyResult<()> {
    match expected {
        Some(expected) if expected == actual => Ok(()),
        Some(expected) => Err(VerifyError::BodyHashMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }),
        None => Err(VerifyError::BodyHashMismatch {
            expected: "<missing>".to_string(),
            actual: actual.to_string(),
        }),
    }
}
