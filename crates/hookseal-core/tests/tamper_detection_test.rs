//! Proves that a single flipped bit anywhere in a signed token is detected.

mod common;

use common::*;
use hookseal_core::{base64url, Reason, Verifier, VerifyRequest};
use proptest::prelude::*;

struct Parts {
    header: Vec<u8>,
    payload: Vec<u8>,
    signature: Vec<u8>,
}

fn split(token: &str) -> Parts {
    let mut segments = token.split('.').map(|s| base64url::decode(s).unwrap());
    Parts {
        header: segments.next().unwrap(),
        payload: segments.next().unwrap(),
        signature: segments.next().unwrap(),
    }
}

fn join(parts: &Parts) -> String {
    format!(
        "{}.{}.{}",
        base64url::encode(&parts.header),
        base64url::encode(&parts.payload),
        base64url::encode(&parts.signature)
    )
}

fn verify_token(token: String) -> Reason {
    let request = ping_request();
    let tampered = VerifyRequest {
        token: Some(token),
        ..request
    };
    Verifier::default().verify(&tampered).reason
}

#[test]
fn untampered_token_round_trips_through_fixture() {
    let token = ping_request().token.unwrap();
    assert_eq!(join(&split(&token)), token);
    assert_eq!(verify_token(token), Reason::Accepted);
}

#[test]
fn every_signature_byte_is_covered() {
    let token = ping_request().token.unwrap();
    for index in 0..64 {
        let mut parts = split(&token);
        parts.signature[index] ^= 1 << (index % 8);
        assert_eq!(
            verify_token(join(&parts)),
            Reason::InvalidSignature,
            "byte {index}"
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn header_bit_flip_never_accepted(index in any::<prop::sample::Index>(), bit in 0u8..8) {
        let token = ping_request().token.unwrap();
        let mut parts = split(&token);
        let i = index.index(parts.header.len());
        parts.header[i] ^= 1 << bit;
        prop_assert_ne!(verify_token(join(&parts)), Reason::Accepted);
    }

    #[test]
    fn payload_bit_flip_never_accepted(index in any::<prop::sample::Index>(), bit in 0u8..8) {
        let token = ping_request().token.unwrap();
        let mut parts = split(&token);
        let i = index.index(parts.payload.len());
        parts.payload[i] ^= 1 << bit;
        prop_assert_ne!(verify_token(join(&parts)), Reason::Accepted);
    }

    #[test]
    fn signature_bit_flip_never_accepted(index in 0usize..64, bit in 0u8..8) {
        let token = ping_request().token.unwrap();
        let mut parts = split(&token);
        parts.signature[index] ^= 1 << bit;
        prop_assert_ne!(verify_token(join(&parts)), Reason::Accepted);
    }
}
