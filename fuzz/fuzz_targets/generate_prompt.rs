#![no_main]

use libfuzzer_sys::fuzz_target;
use bns_prompt::{PromptGenerator, PROMPT_TRAILER};

fuzz_target!(|data: &[u8]| {
    // First 8 bytes are the height, the rest is the root
    if data.len() < 9 { return; }
    let height = u64::from_le_bytes(data[..8].try_into().unwrap_or([0u8; 8]));
    let root = &data[8..];

    let prompt = PromptGenerator::default()
        .generate_from_bytes(root, height)
        .expect("non-empty root");
    assert!(prompt.text.starts_with(&format!("block {height} ")));
    assert!(prompt.text.ends_with(PROMPT_TRAILER));
});
