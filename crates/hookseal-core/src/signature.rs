//! ES256 signature check over the token signing input.

use p256::ecdsa::{signature::Verifier, Signature, VerifyingKey};

use crate::der::StandardSignature;

/// Verify a DER signature over `signing_input` (SHA-256, P-256).
///
/// Any cryptographic mismatch is `false`, including DER whose integers are
/// zero or not below the group order.
pub fn verify(signing_input: &[u8], signature: &StandardSignature, key: &VerifyingKey) -> bool {
    let Ok(signature) = Signature::from_der(signature.as_bytes()) else {
        tracing::debug!("signature integers out of range");
        return false;
    };
    key.verify(signing_input, &signature).is_ok()
}
