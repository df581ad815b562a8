//! Random key and IV generation.

use aes_core::{AesKey, Block, KeySize, BLOCK_SIZE};
use rand::{CryptoRng, RngCore};

/// Draws a fresh key of the requested size.
pub fn generate_key<R: RngCore + CryptoRng>(size: KeySize, rng: &mut R) -> AesKey {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes[..size.key_bytes()]);
    let key = AesKey::from_slice(&bytes[..size.key_bytes()]);
    bytes.fill(0);
    key.expect("length comes from KeySize")
}

/// Draws a fresh IV.
pub fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R) -> Block {
    let mut iv = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut iv);
    iv
}
