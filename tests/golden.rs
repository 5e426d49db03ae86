use bns_prompt::*;
use pretty_assertions::assert_eq;

// Bitcoin genesis block merkle root
const GENESIS_ROOT: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
const ZERO_ROOT: &str = "0000000000000000000000000000000000000000000000000000000000000000";

#[test]
fn genesis_alphabet_golden() {
    assert_eq!(hash_to_alphabet(GENESIS_ROOT).unwrap(), "au4bw-lvnh1zk1pqx6h3zhol4sml5ppw");
}

#[test]
fn genesis_prompt_golden() {
    assert_eq!(
        generate_bns_prompt(GENESIS_ROOT, 0).unwrap(),
        "block 0 house energetic low dub mix hum fog run bit bpm genesis era bitcoin blockchain"
    );
}

#[test]
fn genesis_matches_golden() {
    let matches = find_bns_words(GENESIS_ROOT, 3).unwrap();
    let low = &matches[0];
    assert_eq!(low.word, "low");
    assert_eq!(low.position, 29);
    assert_eq!(low.window, "ppw");
    assert_eq!(low.shifts, vec![-4, -1, 0]);
    assert_eq!(low.total_shift, 5);
    assert!(!low.exact_match);
    // "dub" and "mix" tie on 6, dictionary order decides
    assert_eq!(matches[1].word, "dub");
    assert_eq!(matches[2].word, "mix");
}

#[test]
fn zero_root_prompt_golden() {
    assert_eq!(
        generate_bns_prompt(ZERO_ROOT, 0).unwrap(),
        "block 0 ambient dark fade acid ice 909 808 pad lead dub genesis era bitcoin blockchain"
    );
}

#[test]
fn zero_root_scenario() {
    let alpha = hash_to_alphabet(ZERO_ROOT).unwrap();
    assert_eq!(alpha, "a".repeat(32));
    let m = find_word_match(&alpha, "aaa").unwrap();
    assert!(m.exact_match);
    assert_eq!(m.position, 0);
}

#[test]
fn single_byte_scenarios() {
    assert_eq!(hash_to_alphabet("00").unwrap(), "a");
    assert_eq!(hash_to_alphabet("ff").unwrap(), "7");
}

#[test]
fn first_halving_label() {
    let p = generate_bns_prompt(GENESIS_ROOT, 210_000).unwrap();
    assert!(p.contains("first halving"));
    assert!(p.starts_with("block 210000 "));
}

#[test]
fn modern_block_prompt() {
    let p = generate_bns_prompt(GENESIS_ROOT, 850_000).unwrap();
    assert!(p.ends_with("modern era bitcoin blockchain"));
}

#[test]
fn no_era_between_windows() {
    let p = generate_bns_prompt(GENESIS_ROOT, 500_000).unwrap();
    assert_eq!(
        p,
        "block 500000 house energetic low dub mix hum fog run bit bpm bitcoin blockchain"
    );
}
