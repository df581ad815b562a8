//! Reference AES implementation for 128, 192 and 256-bit keys.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(2^8) arithmetic and compile-time S-box and round-constant tables.
//! - Key schedules for every AES key size.
//! - Single-block encryption and decryption.
//! - Public types shared across the workspace.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, try_expand_key};
pub use crate::error::{Error, Result};
pub use crate::key::{AesKey, KeySize, RoundKeys, MAX_ROUNDS};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
