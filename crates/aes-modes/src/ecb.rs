//! Electronic codebook mode over block-aligned buffers.
//!
//! Blocks are independent, so both directions fan out over the worker pool.

use aes_core::{decrypt_block, encrypt_block, RoundKeys, BLOCK_SIZE};

use crate::error::{Error, Result};
use crate::pool::for_each_block;

/// Encrypts `data` in place. `data` must be a whole number of blocks.
pub fn encrypt_blocks(data: &mut [u8], round_keys: &RoundKeys, workers: usize) -> Result<()> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidPlaintextLength { got: data.len() });
    }
    for_each_block(data, workers, |block| {
        *block = encrypt_block(block, round_keys);
    });
    Ok(())
}

/// Decrypts `data` in place. `data` must be a whole number of blocks.
pub fn decrypt_blocks(data: &mut [u8], round_keys: &RoundKeys, workers: usize) -> Result<()> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertextLength { got: data.len() });
    }
    for_each_block(data, workers, |block| {
        *block = decrypt_block(block, round_keys);
    });
    Ok(())
}
