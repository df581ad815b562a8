//! Hex and byte conversions at the API boundary.

use aes_core::{AesKey, Block};

use crate::error::{Error, Result};

/// Encodes bytes as lower-case hex.
pub fn encode_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(data)
}

/// Decodes hex, ignoring surrounding whitespace.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text.trim())?)
}

/// Parses a 32/48/64-digit hex key.
pub fn parse_key_hex(text: &str) -> Result<AesKey> {
    Ok(AesKey::from_slice(&decode_hex(text)?)?)
}

/// Parses a 32-digit hex IV.
pub fn parse_iv_hex(text: &str) -> Result<Block> {
    let bytes = decode_hex(text)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| Error::InvalidIvLength { got: bytes.len() })
}
