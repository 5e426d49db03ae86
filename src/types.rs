use serde::Serialize;

/// Cyclic alphabet: `a..z`, `0..9`, `-` (37 symbols).
pub const ALPHABET: &[u8; 37] = b"abcdefghijklmnopqrstuvwxyz0123456789-";
pub const ALPHABET_LEN: usize = ALPHABET.len();
/// Largest circular distance between two alphabet symbols.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const MAX_SHIFT: i32 = (ALPHABET_LEN / 2) as i32;
/// Returned by `shift_distance` when either character is outside the alphabet.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const UNKNOWN_SHIFT: i32 = ALPHABET_LEN as i32;

pub const MERKLE_ROOT_LEN: usize = 32;               // bytes
pub const MERKLE_ROOT_HEX_LEN: usize = MERKLE_ROOT_LEN * 2;
pub const DEFAULT_MAX_WORDS: usize = 8;

pub const PROMPT_TRAILER: &str = "bitcoin blockchain";

/// Indexed by `first_byte % 8`.
pub const GENRES: [&str; 8] = [
    "ambient",
    "techno",
    "house",
    "drum and bass",
    "lo-fi hip hop",
    "synthwave",
    "dubstep",
    "trance",
];

/// Indexed by `last_byte % 8`.
pub const MOODS: [&str; 8] = [
    "dark",
    "euphoric",
    "melancholic",
    "energetic",
    "dreamy",
    "hypnotic",
    "mysterious",
    "uplifting",
];

/// Best alignment of one dictionary word against an alphabet string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    pub word: String,
    /// Start offset of `window` in the alphabet string.
    pub position: usize,
    pub window: String,
    /// Signed shift per character, `window[i] -> word[i]`.
    pub shifts: Vec<i32>,
    pub total_shift: u32,
    pub exact_match: bool,
}
