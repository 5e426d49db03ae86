use crate::{
    alphabet::{bytes_to_alphabet, decode_hex},
    config::PromptConfig,
    dictionary::WORDS,
    era::Era,
    errors::BnsError,
    matcher::find_word_match,
    types::{WordMatch, GENRES, MOODS, PROMPT_TRAILER},
};

/// A generated prompt together with the pieces it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BnsPrompt {
    pub text: String,
    pub genre: &'static str,
    pub mood: &'static str,
    pub era: Option<Era>,
    /// Ranked matches, truncated to the configured word count.
    pub matches: Vec<WordMatch>,
}

impl BnsPrompt {
    /// Matched words in ranked order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.word.as_str())
    }
}

/// Match every word against `tld_alpha` and rank the results.
///
/// Exact matches come first, then ascending total shift. The sort is stable, so
/// equal keys keep the order of `words`.
#[must_use]
pub fn rank_matches(tld_alpha: &str, words: &[&str]) -> Vec<WordMatch> {
    let mut matches: Vec<WordMatch> = words
        .iter()
        .filter_map(|w| find_word_match(tld_alpha, w))
        .collect();
    matches.sort_by_key(|m| (!m.exact_match, m.total_shift));
    matches
}

/// Top `max_words` dictionary matches for a hex merkle root.
///
/// # Errors
///
/// Returns `BnsError` if `merkle_root` is not valid hex.
pub fn find_bns_words(merkle_root: &str, max_words: usize) -> Result<Vec<WordMatch>, BnsError> {
    let bytes = decode_hex(merkle_root)?;
    let mut matches = rank_matches(&bytes_to_alphabet(&bytes), WORDS);
    matches.truncate(max_words);
    Ok(matches)
}

/// Prompt text for a merkle root at `block_height` with the default config.
///
/// # Errors
///
/// Returns `BnsError` if `merkle_root` is empty or not valid hex.
pub fn generate_bns_prompt(merkle_root: &str, block_height: u64) -> Result<String, BnsError> {
    PromptGenerator::default()
        .generate(merkle_root, block_height)
        .map(|p| p.text)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptGenerator {
    config: PromptConfig,
}

impl PromptGenerator {
    /// # Errors
    ///
    /// Returns `BnsError::InvalidConfig` if the config does not validate.
    pub fn new(config: PromptConfig) -> Result<Self, BnsError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Build the prompt for a hex merkle root.
    ///
    /// # Errors
    ///
    /// Returns `BnsError` if `merkle_root` is empty or not valid hex.
    pub fn generate(&self, merkle_root: &str, block_height: u64) -> Result<BnsPrompt, BnsError> {
        let bytes = decode_hex(merkle_root)?;
        self.generate_from_bytes(&bytes, block_height)
    }

    /// Build the prompt from raw root bytes.
    ///
    /// # Errors
    ///
    /// Returns `BnsError::EmptyInput` if `bytes` is empty.
    pub fn generate_from_bytes(&self, bytes: &[u8], block_height: u64) -> Result<BnsPrompt, BnsError> {
        let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
            return Err(BnsError::EmptyInput);
        };

        let tld_alpha = bytes_to_alphabet(bytes);
        let mut matches = rank_matches(&tld_alpha, WORDS);
        tracing::trace!(%tld_alpha, candidates = matches.len(), "ranked dictionary");
        matches.truncate(self.config.max_words);

        let genre = GENRES[usize::from(first) % GENRES.len()];
        let mood = MOODS[usize::from(last) % MOODS.len()];
        let era = if self.config.include_era { Era::from_height(block_height) } else { None };

        let words = matches.iter().map(|m| m.word.as_str()).collect::<Vec<_>>().join(" ");
        let height = format!("block {block_height}");
        let text = [height.as_str(), genre, mood, words.as_str(), era.map_or("", Era::label), PROMPT_TRAILER]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_owned();

        tracing::debug!(
            block_height,
            genre,
            mood,
            era = era.map(Era::label),
            exact = matches.iter().filter(|m| m.exact_match).count(),
            "generated bns prompt"
        );

        Ok(BnsPrompt { text, genre, mood, era, matches })
    }
}
