use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BnsError {
    #[error("odd-length hex string: {len} characters")]
    OddLength { len: usize },

    #[error("invalid hex character {character:?} at index {index}")]
    InvalidHexCharacter { character: char, index: usize },

    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("empty input: at least one byte is required")]
    EmptyInput,

    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    #[error("block decode error: {0}")]
    BlockDecode(String),
}
