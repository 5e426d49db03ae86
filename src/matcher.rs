use crate::{shift::shift_distance, types::WordMatch};

/// Best alignment of `word` inside `tld_alpha`.
///
/// Every start position is scored by the sum of absolute per-character shifts.
/// The lowest score wins and earlier positions win ties; the scan stops at the
/// first exact match. Returns `None` if the word is empty or longer than the
/// string.
#[must_use]
pub fn find_word_match(tld_alpha: &str, word: &str) -> Option<WordMatch> {
    let alpha: Vec<char> = tld_alpha.chars().collect();
    let target: Vec<char> = word.chars().collect();
    if target.is_empty() || target.len() > alpha.len() {
        return None;
    }

    let mut best: Option<(usize, Vec<i32>, u32)> = None;
    for (pos, window) in alpha.windows(target.len()).enumerate() {
        let shifts: Vec<i32> = window
            .iter()
            .zip(&target)
            .map(|(&src, &dst)| shift_distance(src, dst))
            .collect();
        let total: u32 = shifts.iter().map(|s| s.unsigned_abs()).sum();

        if !matches!(&best, Some((_, _, t)) if total >= *t) {
            let exact = total == 0;
            best = Some((pos, shifts, total));
            if exact {
                break;
            }
        }
    }

    best.map(|(position, shifts, total_shift)| WordMatch {
        word: word.to_owned(),
        position,
        window: alpha[position..position + target.len()].iter().collect(),
        exact_match: shifts.iter().all(|&s| s == 0),
        shifts,
        total_shift,
    })
}
