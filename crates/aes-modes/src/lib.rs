//! ECB and CBC chaining modes on top of `aes-core`.
//!
//! The crate turns the single-block cipher into a buffer cipher:
//! - explicit padding ([`Padding`]): PKCS#7 by default, plus the legacy
//!   zero fill and an unpadded mode;
//! - ECB and CBC drivers, with block-parallel paths for ECB and CBC
//!   decryption;
//! - a keyed [`Cipher`] handle, hex helpers and key/IV generation.
//!
//! IV uniqueness is not checked. Callers must use a fresh IV for every
//! message encrypted under the same key.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cbc;
mod cipher;
pub mod codec;
mod config;
pub mod ecb;
mod error;
mod keygen;
mod mode;
mod padding;
mod pool;

pub use aes_core::{expand_key, try_expand_key, AesKey, Block, KeySize, RoundKeys, BLOCK_SIZE};

pub use crate::cipher::{decrypt, decrypt_with, encrypt, encrypt_with, Cipher};
pub use crate::config::CipherConfig;
pub use crate::error::{Error, Result};
pub use crate::keygen::{generate_iv, generate_key};
pub use crate::mode::Mode;
pub use crate::padding::Padding;
