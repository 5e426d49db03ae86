use bns_prompt::*;

const GENESIS_JSON: &str = r#"{
    "height": 0,
    "hash": "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
    "merkleRoot": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
    "timestamp": 1231006505
}"#;

#[test]
fn decodes_provider_json() {
    let block = BlockData::from_json(GENESIS_JSON).expect("decode");
    assert_eq!(block.height, 0);
    assert_eq!(block.timestamp, 1_231_006_505);
    assert_eq!(block.merkle_root.len(), MERKLE_ROOT_HEX_LEN);
}

#[test]
fn block_prompt_matches_direct_call() {
    let block = BlockData::from_json(GENESIS_JSON).unwrap();
    let prompt = block.prompt(&PromptGenerator::default()).unwrap();
    assert_eq!(prompt.text, generate_bns_prompt(&block.merkle_root, block.height).unwrap());
    assert_eq!(prompt.era, Some(Era::Genesis));
}

#[test]
fn seed_is_stable_for_block() {
    let block = BlockData::from_json(GENESIS_JSON).unwrap();
    let root = decode_hex(&block.merkle_root).unwrap();
    assert_eq!(block.generation_seed().unwrap(), derive_generation_seed(&root, 0));
}

#[test]
fn missing_field_fails() {
    let json = r#"{"height": 1, "hash": "00", "timestamp": 5}"#;
    match BlockData::from_json(json) {
        Err(BnsError::BlockDecode(msg)) => assert!(msg.contains("merkleRoot")),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn negative_height_fails() {
    let json = GENESIS_JSON.replace("\"height\": 0", "\"height\": -1");
    assert!(matches!(BlockData::from_json(&json), Err(BnsError::BlockDecode(_))));
}

#[test]
fn short_merkle_root_fails() {
    let json = GENESIS_JSON.replace("4a5e1e4b", "");
    assert_eq!(
        BlockData::from_json(&json),
        Err(BnsError::InvalidLength { expected: 64, got: 56 })
    );
}

#[test]
fn non_hex_merkle_root_fails() {
    let json = GENESIS_JSON.replace("4a5e1e4b", "4a5e1e4z");
    assert_eq!(
        BlockData::from_json(&json),
        Err(BnsError::InvalidHexCharacter { character: 'z', index: 7 })
    );
}
