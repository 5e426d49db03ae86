#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_panics_doc)]

//! BNS (Bitmap Naming Service) prompt derivation.
//!
//! Turns a Bitcoin block's merkle root into a text prompt for music generation:
//! the root bytes are mapped onto a 37-symbol cyclic alphabet, a fixed word list
//! is matched against that string under circular shift distance, and the best
//! words are combined with genre, mood and era tokens derived from the block.

// Pipeline, leaf first:
// - alphabet:   hex digest -> TLD-alpha string (byte mod 37)
// - shift:      signed circular distance between two symbols
// - matcher:    best window for one word
// - prompt:     rank the dictionary, compose the prompt
//
// Everything here is pure and allocation-local; all tables are constants.

pub mod types;
pub mod errors;
pub mod alphabet;
pub mod shift;
pub mod matcher;
pub mod dictionary;
pub mod era;
pub mod config;
pub mod prompt;
pub mod seed;
pub mod block;

// Re-export commonly used types and functions
pub use types::*;
pub use errors::BnsError;
pub use alphabet::{hash_to_alphabet, bytes_to_alphabet, decode_hex, decode_merkle_root};
pub use shift::{shift_distance, alphabet_index};
pub use matcher::find_word_match;
pub use era::{Era, halving_epoch};
pub use config::PromptConfig;
pub use prompt::{BnsPrompt, PromptGenerator, find_bns_words, generate_bns_prompt, rank_matches};
pub use seed::derive_generation_seed;
pub use block::BlockData;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
