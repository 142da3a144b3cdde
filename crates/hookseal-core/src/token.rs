//! Compact token (JWS compact serialization) decoding.
//!
//! Decoding never touches key material: the algorithm is checked here so
//! that algorithm confusion is rejected before any cryptographic work.

use serde_json::{Map, Value};

use crate::base64url;
use crate::der::RawSignature;
use crate::error::{VerifyError, VerifyResult};

/// The only accepted `alg` header value.
pub const SUPPORTED_ALGORITHM: &str = "ES256";

/// Decoded token parts.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    /// Header object.
    pub header: Map<String, Value>,

    /// Payload object.
    pub payload: Map<String, Value>,

    /// Raw `r || s` signature.
    pub raw_signature: RawSignature,

    /// `header_b64 "." payload_b64`, exactly as received.
    pub signing_input: String,
}

impl DecodedToken {
    /// A string claim from the payload.
    pub fn claim_str(&self, name: &str) -> Option<&str> {
        self.payload.get(name).and_then(Value::as_str)
    }
}

/// Split and decode a compact token.
pub fn decode(token: &str) -> VerifyResult<DecodedToken> {
    let segments: Vec<&str> = token.split('.').collect();
    let &[header_b64, payload_b64, signature_b64] = segments.as_slice() else {
        return Err(VerifyError::malformed_token(format!(
            "expected 3 segments, got {}",
            segments.len()
        )));
    };
    if header_b64.is_empty() || payload_b64.is_empty() || signature_b64.is_empty() {
        return Err(VerifyError::malformed_token("empty segment"));
    }

    let header = decode_json_segment("header", header_b64)?;
    let payload = decode_json_segment("payload", payload_b64)?;

    match header.get("alg") {
        Some(Value::String(alg)) if alg == SUPPORTED_ALGORITHM => {}
        Some(Value::String(alg)) => {
            return Err(VerifyError::UnsupportedAlgorithm { alg: alg.clone() })
        }
        Some(other) => {
            return Err(VerifyError::UnsupportedAlgorithm {
                alg: other.to_string(),
            })
        }
        None => {
            return Err(VerifyError::UnsupportedAlgorithm {
                alg: "<absent>".to_string(),
            })
        }
    }

    let signature_bytes = base64url::decode(signature_b64)
        .map_err(|e| VerifyError::malformed_token(format!("signature: {}", e)))?;
    let raw_signature = RawSignature::try_from(signature_bytes.as_slice())?;

    Ok(DecodedToken {
        header,
        payload,
        raw_signature,
        signing_input: format!("{}.{}", header_b64, payload_b64),
    })
}

fn decode_json_segment(name: &str, segment: &str) -> VerifyResult<Map<String, Value>> {
    let bytes = base64url::decode(segment)
        .map_err(|e| VerifyError::malformed_token(format!("{}: {}", name, e)))?;
    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(VerifyError::malformed_token(format!(
            "{} is not a JSON object",
            name
        ))),
        Err(e) => Err(VerifyError::malformed_token(format!(
            "{} is not valid JSON: {}",
            name, e
        ))),
    }
}
