use crate::{errors::BnsError, types::DEFAULT_MAX_WORDS};

/// Knobs for `PromptGenerator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptConfig {
    /// How many ranked words go into the prompt.
    pub max_words: usize,
    pub include_era: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { max_words: DEFAULT_MAX_WORDS, include_era: true }
    }
}

impl PromptConfig {
    /// # Errors
    ///
    /// Returns `BnsError::InvalidConfig` if `max_words` is zero.
    pub const fn validate(&self) -> Result<(), BnsError> {
        if self.max_words == 0 {
            return Err(BnsError::InvalidConfig("max_words must be at least 1"));
        }
        Ok(())
    }
}
