//! Cipher block chaining over block-aligned buffers.
//!
//! Encryption is inherently sequential. Decryption only needs the
//! ciphertext of the preceding block, so the block transforms run on the
//! worker pool and the chaining XOR is applied afterwards.

use aes_core::{decrypt_block, encrypt_block, xor_in_place, Block, RoundKeys, BLOCK_SIZE};

use crate::error::{Error, Result};
use crate::pool::for_each_block;

/// Encrypts `data` in place, chaining from `iv`.
pub fn encrypt_blocks(data: &mut [u8], round_keys: &RoundKeys, iv: &Block) -> Result<()> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidPlaintextLength { got: data.len() });
    }
    let mut prev = *iv;
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let block: &mut Block = chunk.try_into().expect("chunk length is sixteen");
        xor_in_place(block, &prev);
        *block = encrypt_block(block, round_keys);
        prev = *block;
    }
    Ok(())
}

/// Decrypts `data` in place, chaining from `iv`.
pub fn decrypt_blocks(
    data: &mut [u8],
    round_keys: &RoundKeys,
    iv: &Block,
    workers: usize,
) -> Result<()> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertextLength { got: data.len() });
    }
    let ciphertext = data.to_vec();
    for_each_block(data, workers, |block| {
        *block = decrypt_block(block, round_keys);
    });

    let previous = core::iter::once(&iv[..]).chain(ciphertext.chunks_exact(BLOCK_SIZE));
    for (chunk, prev) in data.chunks_exact_mut(BLOCK_SIZE).zip(previous) {
        for (d, p) in chunk.iter_mut().zip(prev) {
            *d ^= *p;
        }
    }
    Ok(())
}
