#![no_main]

use hookseal_core::der::{to_standard_encoding, RawSignature, RAW_SIGNATURE_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = RawSignature::try_from(data) else {
        assert_ne!(data.len(), RAW_SIGNATURE_LEN);
        return;
    };
    let der = to_standard_encoding(&raw);
    assert_eq!(der.as_bytes()[0], 0x30);
    assert_eq!(der.as_bytes()[1] as usize, der.as_bytes().len() - 2);
    assert!(der.as_bytes().len() <= 72);
});
