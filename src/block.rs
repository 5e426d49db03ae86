use serde::{Deserialize, Serialize};

use crate::{
    alphabet::decode_merkle_root,
    errors::BnsError,
    prompt::{BnsPrompt, PromptGenerator},
    seed::derive_generation_seed,
};

/// Block record as returned by the blockchain data provider.
///
/// Every field is required; a response missing one fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    pub height: u64,
    pub hash: String,
    pub merkle_root: String,
    pub timestamp: i64,
}

impl BlockData {
    /// Decode and validate a provider JSON document.
    ///
    /// # Errors
    ///
    /// Returns `BnsError::BlockDecode` for malformed JSON or missing fields, and
    /// the `validate` errors for a bad merkle root.
    pub fn from_json(json: &str) -> Result<Self, BnsError> {
        let block: Self = serde_json::from_str(json).map_err(|e| BnsError::BlockDecode(e.to_string()))?;
        block.validate()?;
        Ok(block)
    }

    /// The merkle root must be a full 32-byte hex digest.
    ///
    /// # Errors
    ///
    /// Returns `BnsError::InvalidLength` or a hex decoding error.
    pub fn validate(&self) -> Result<(), BnsError> {
        decode_merkle_root(&self.merkle_root).map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `BnsError` if the merkle root is not a valid 64-character hex digest.
    pub fn prompt(&self, generator: &PromptGenerator) -> Result<BnsPrompt, BnsError> {
        let root = decode_merkle_root(&self.merkle_root)?;
        generator.generate_from_bytes(&root, self.height)
    }

    /// # Errors
    ///
    /// Returns `BnsError` if the merkle root is not a valid 64-character hex digest.
    pub fn generation_seed(&self) -> Result<u32, BnsError> {
        let root = decode_merkle_root(&self.merkle_root)?;
        Ok(derive_generation_seed(&root, self.height))
    }
}
