use crate::types::{ALPHABET, ALPHABET_LEN, UNKNOWN_SHIFT};

/// Position of `c` in the alphabet, case-insensitive.
#[inline]
#[must_use]
pub fn alphabet_index(c: char) -> Option<usize> {
    let c = u8::try_from(c).ok()?.to_ascii_lowercase();
    ALPHABET.iter().position(|&a| a == c)
}

/// Minimal signed circular distance from `source` to `target` on the 37-symbol loop.
///
/// Positive means forward (towards higher alphabet indices). Ties between the two
/// directions never occur because the loop length is odd. Returns `UNKNOWN_SHIFT`
/// when either character is outside the alphabet.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn shift_distance(source: char, target: char) -> i32 {
    let (Some(s), Some(t)) = (alphabet_index(source), alphabet_index(target)) else {
        return UNKNOWN_SHIFT;
    };
    let forward = (t + ALPHABET_LEN - s) % ALPHABET_LEN;
    let backward = (s + ALPHABET_LEN - t) % ALPHABET_LEN;
    if forward <= backward {
        forward as i32
    } else {
        -(backward as i32)
    }
}
