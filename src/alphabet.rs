use crate::{errors::BnsError, types::{ALPHABET, ALPHABET_LEN, MERKLE_ROOT_HEX_LEN}};

/// Decode a hex string into bytes, rejecting odd lengths and non-hex characters.
///
/// # Errors
///
/// Returns `BnsError::OddLength` or `BnsError::InvalidHexCharacter`.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, BnsError> {
    if !hex_str.len().is_multiple_of(2) {
        return Err(BnsError::OddLength { len: hex_str.len() });
    }
    hex::decode(hex_str).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            BnsError::InvalidHexCharacter { character: c, index }
        }
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            BnsError::OddLength { len: hex_str.len() }
        }
    })
}

/// Decode a full merkle root: exactly 64 hex characters.
///
/// # Errors
///
/// Returns `BnsError::InvalidLength` for any other length, or a hex decoding error.
pub fn decode_merkle_root(hex_str: &str) -> Result<Vec<u8>, BnsError> {
    if hex_str.len() != MERKLE_ROOT_HEX_LEN {
        return Err(BnsError::InvalidLength { expected: MERKLE_ROOT_HEX_LEN, got: hex_str.len() });
    }
    decode_hex(hex_str)
}

/// Map one byte onto the cyclic alphabet (`byte mod 37`).
#[inline]
#[must_use]
pub const fn byte_to_symbol(byte: u8) -> char {
    ALPHABET[byte as usize % ALPHABET_LEN] as char
}

/// One alphabet symbol per input byte.
#[must_use]
pub fn bytes_to_alphabet(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| byte_to_symbol(b)).collect()
}

/// TLD-alpha string for a hex digest: one symbol per byte pair.
///
/// # Errors
///
/// Returns `BnsError` if the input has odd length or contains a non-hex character.
pub fn hash_to_alphabet(hex_str: &str) -> Result<String, BnsError> {
    let bytes = decode_hex(hex_str)?;
    Ok(bytes_to_alphabet(&bytes))
}
