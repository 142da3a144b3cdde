//! Shared fixtures: deterministic P-256 signer and request builders.

#![allow(dead_code)]

use hookseal_core::{base64url, PublicKeyMaterial, VerifyRequest};
use p256::ecdsa::{signature::Signer, Signature, SigningKey};
use serde_json::{json, Value};

/// Deterministic test key seed.
pub const TEST_KEY_SEED: [u8; 32] = [42u8; 32];

/// `{"event":"ping","id":7}` and the digest of its canonical form.
pub const PING_BODY: &str = r#"{"event":"ping","id":7}"#;
pub const PING_DIGEST: &str = "4753c5f8da4d1218eb0b76b7f6827c9091816380c0f004d5b2770e6851d6b82e";

pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&TEST_KEY_SEED.into()).unwrap()
}

pub fn other_signing_key() -> SigningKey {
    SigningKey::from_bytes(&[7u8; 32].into()).unwrap()
}

pub fn public_key_b64(key: &SigningKey) -> String {
    PublicKeyMaterial::encode(key.verifying_key())
}

pub fn segment(value: &Value) -> String {
    base64url::encode(serde_json::to_vec(value).unwrap())
}

/// Sign `header.payload` with `key` and return the compact token.
pub fn sign_segments(key: &SigningKey, header_b64: &str, payload_b64: &str) -> String {
    let signing_input = format!("{}.{}", header_b64, payload_b64);
    let signature: Signature = key.sign(signing_input.as_bytes());
    format!("{}.{}", signing_input, base64url::encode(signature.to_bytes()))
}

pub fn sign_token(key: &SigningKey, header: &Value, payload: &Value) -> String {
    sign_segments(key, &segment(header), &segment(payload))
}

pub fn es256_header() -> Value {
    json!({"alg": "ES256", "typ": "JWT"})
}

pub fn body_b64(text: &str) -> String {
    base64url::encode(text)
}

/// Request signed by the test key over `PING_BODY`.
pub fn ping_request() -> VerifyRequest {
    let key = signing_key();
    let token = sign_token(
        &key,
        &es256_header(),
        &json!({"request_body_sha256": PING_DIGEST}),
    );
    VerifyRequest::new(token, public_key_b64(&key), body_b64(PING_BODY))
}

/// Request whose token claims `digest`, carrying `body_text`.
pub fn request_with(digest: &str, body_text: &str) -> VerifyRequest {
    let key = signing_key();
    let token = sign_token(
        &key,
        &es256_header(),
        &json!({"request_body_sha256": digest}),
    );
    VerifyRequest::new(token, public_key_b64(&key), body_b64(body_text))
}
