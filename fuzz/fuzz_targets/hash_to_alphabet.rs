#![no_main]

use libfuzzer_sys::fuzz_target;
use bns_prompt::{hash_to_alphabet, ALPHABET};

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must either convert cleanly or fail with a structured error
    let Ok(text) = std::str::from_utf8(data) else { return; };
    if let Ok(alpha) = hash_to_alphabet(text) {
        assert_eq!(alpha.len(), text.len() / 2);
        assert!(alpha.bytes().all(|c| ALPHABET.contains(&c)));
    }
});
