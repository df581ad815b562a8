//! Key types for AES-128/192/256.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::{Error, Result};

/// Largest number of rounds (AES-256).
pub const MAX_ROUNDS: usize = 14;

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Key length in bytes.
    pub const fn key_bytes(self) -> usize {
        match self {
            KeySize::Aes128 => 16,
            KeySize::Aes192 => 24,
            KeySize::Aes256 => 32,
        }
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.key_bytes() * 8
    }

    /// Number of 32-bit words in the root key (`Nk`).
    pub const fn words(self) -> usize {
        self.key_bytes() / 4
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        self.words() + 6
    }

    /// Maps a key length in bytes to its size, if supported.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(KeySize::Aes128),
            24 => Some(KeySize::Aes192),
            32 => Some(KeySize::Aes256),
            _ => None,
        }
    }

    /// Maps a key length in bits to its size, if supported.
    pub const fn from_bits(bits: usize) -> Option<Self> {
        if bits % 8 != 0 {
            return None;
        }
        Self::from_len(bits / 8)
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// AES root key of 16, 24 or 32 bytes. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AesKey {
    bytes: [u8; 32],
    #[zeroize(skip)]
    size: KeySize,
}

impl AesKey {
    /// Copies a key from a byte slice, validating its length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let size = KeySize::from_len(bytes.len())
            .ok_or(Error::InvalidKeyLength { got: bytes.len() })?;
        let mut buf = [0u8; 32];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { bytes: buf, size })
    }

    /// Key size.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.key_bytes()]
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for AesKey {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::from_slice(value)
    }
}

macro_rules! impl_from_array {
    ($($len:literal => $size:ident),*) => {
        $(
            impl From<[u8; $len]> for AesKey {
                fn from(value: [u8; $len]) -> Self {
                    let mut bytes = [0u8; 32];
                    bytes[..$len].copy_from_slice(&value);
                    Self {
                        bytes,
                        size: KeySize::$size,
                    }
                }
            }
        )*
    };
}

impl_from_array!(16 => Aes128, 24 => Aes192, 32 => Aes256);

/// Expanded round keys: `Nr + 1` blocks. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUNDS + 1],
    #[zeroize(skip)]
    size: KeySize,
}

impl RoundKeys {
    pub(crate) fn new(keys: [Block; MAX_ROUNDS + 1], size: KeySize) -> Self {
        Self { keys, size }
    }

    /// Returns the round key at the requested index (`0..=Nr`).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.keys[..=self.rounds()][round]
    }

    /// Number of rounds (`Nr`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Size of the key these round keys were derived from.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// All `Nr + 1` round keys in order.
    pub fn as_slice(&self) -> &[Block] {
        &self.keys[..=self.rounds()]
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
