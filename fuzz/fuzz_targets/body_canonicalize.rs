#![no_main]

use hookseal_core::canonicalize::canonicalize_text;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(first) = canonicalize_text(text) else {
        return;
    };
    // Canonical output is a fixed point.
    let second = canonicalize_text(first.as_str()).expect("canonical output must reparse");
    assert_eq!(first, second);
});
