#![no_main]

use hookseal_core::{token, Verifier, VerifyRequest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let _ = token::decode(text);

    // Arbitrary tokens must never be accepted or escape as a panic.
    let outcome = Verifier::default().verify(&VerifyRequest::new(text, "e30", "e30"));
    assert!(!outcome.is_accepted());
});
