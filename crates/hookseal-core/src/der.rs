//! JOSE raw signature to DER re-encoding.
//!
//! ES256 tokens carry the signature as fixed-width `r || s` (RFC 7518 §3.4),
//! while generic ECDSA verifiers expect
//! `SEQUENCE { INTEGER r, INTEGER s }`.
//!
//! The integers are signed in DER, so a component whose leading byte has the
//! high bit set after zero-stripping must get a `0x00` prefix.

use crate::error::{VerifyError, VerifyResult};

/// Width of one P-256 scalar.
pub const COMPONENT_LEN: usize = 32;

/// Width of the raw `r || s` signature.
pub const RAW_SIGNATURE_LEN: usize = 2 * COMPONENT_LEN;

const TAG_INTEGER: u8 = 0x02;
const TAG_SEQUENCE: u8 = 0x30;

/// Fixed-width `r || s` signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSignature([u8; RAW_SIGNATURE_LEN]);

impl RawSignature {
    pub fn r(&self) -> &[u8] {
        &self.0[..COMPONENT_LEN]
    }

    pub fn s(&self) -> &[u8] {
        &self.0[COMPONENT_LEN..]
    }

    pub fn as_bytes(&self) -> &[u8; RAW_SIGNATURE_LEN] {
        &self.0
    }
}

impl From<[u8; RAW_SIGNATURE_LEN]> for RawSignature {
    fn from(bytes: [u8; RAW_SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for RawSignature {
    type Error = VerifyError;

    fn try_from(bytes: &[u8]) -> VerifyResult<Self> {
        let raw: [u8; RAW_SIGNATURE_LEN] = bytes.try_into().map_err(|_| {
            VerifyError::malformed_token(format!(
                "signature must be {} bytes, got {}",
                RAW_SIGNATURE_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(raw))
    }
}

/// DER-encoded ECDSA signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardSignature(Vec<u8>);

impl StandardSignature {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for StandardSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Re-encode `r || s` as a minimal DER sequence of two integers.
pub fn to_standard_encoding(raw: &RawSignature) -> StandardSignature {
    let r = der_integer(raw.r());
    let s = der_integer(raw.s());

    let content_len = r.len() + s.len();
    let mut out = Vec::with_capacity(2 + content_len);
    out.push(TAG_SEQUENCE);
    // Two integers of at most 2 + 33 bytes each: always short-form.
    out.push(content_len as u8);
    out.extend_from_slice(&r);
    out.extend_from_slice(&s);
    StandardSignature(out)
}

/// Encode an unsigned big-endian component as a DER INTEGER record.
fn der_integer(component: &[u8]) -> Vec<u8> {
    let stripped = match component.iter().position(|&b| b != 0) {
        Some(pos) => &component[pos..],
        None => &component[component.len().saturating_sub(1)..],
    };
    let needs_sign_byte = stripped.first().is_some_and(|&b| b & 0x80 != 0);
    let len = stripped.len() + usize::from(needs_sign_byte);

    let mut out = Vec::with_capacity(2 + len);
    out.push(TAG_INTEGER);
    out.push(len as u8);
    if needs_sign_byte {
        out.push(0x00);
    }
    out.extend_from_slice(stripped);
    out
}
