//! Padding schemes for variable-length input.

use core::fmt;
use core::str::FromStr;

use aes_core::BLOCK_SIZE;

use crate::error::{Error, Result};

/// How plaintext is brought to a whole number of blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Padding {
    /// PKCS#7: always appends `n` bytes of value `n`, `1 <= n <= 16`.
    #[default]
    Pkcs7,
    /// Legacy zero fill. A trailing partial block is filled with `0x00` and
    /// aligned input is left alone. Unpadding strips up to 15 trailing zero
    /// bytes, so payloads that end in `0x00` do not survive a round trip.
    Zero,
    /// No padding; input must already be block-aligned.
    None,
}

impl Padding {
    /// Lower-case scheme name.
    pub const fn name(self) -> &'static str {
        match self {
            Padding::Pkcs7 => "pkcs7",
            Padding::Zero => "zero",
            Padding::None => "none",
        }
    }

    /// Returns a block-aligned copy of `data`.
    pub fn pad(self, data: &[u8]) -> Result<Vec<u8>> {
        let rem = data.len() % BLOCK_SIZE;
        match self {
            Padding::Pkcs7 => {
                let fill = BLOCK_SIZE - rem;
                let mut out = Vec::with_capacity(data.len() + fill);
                out.extend_from_slice(data);
                out.resize(data.len() + fill, fill as u8);
                Ok(out)
            }
            Padding::Zero => {
                let fill = if rem == 0 { 0 } else { BLOCK_SIZE - rem };
                let mut out = Vec::with_capacity(data.len() + fill);
                out.extend_from_slice(data);
                out.resize(data.len() + fill, 0);
                Ok(out)
            }
            Padding::None => {
                if rem != 0 {
                    return Err(Error::InvalidPlaintextLength { got: data.len() });
                }
                Ok(data.to_vec())
            }
        }
    }

    /// Removes padding from decrypted `data` in place.
    pub fn unpad(self, data: &mut Vec<u8>) -> Result<()> {
        match self {
            Padding::Pkcs7 => {
                let fill = *data.last().ok_or(Error::InvalidPadding)? as usize;
                if fill == 0 || fill > BLOCK_SIZE || fill > data.len() {
                    return Err(Error::InvalidPadding);
                }
                let start = data.len() - fill;
                if data[start..].iter().any(|&b| b as usize != fill) {
                    return Err(Error::InvalidPadding);
                }
                data.truncate(start);
            }
            Padding::Zero => {
                let zeros = data
                    .iter()
                    .rev()
                    .take(BLOCK_SIZE - 1)
                    .take_while(|&&b| b == 0)
                    .count();
                data.truncate(data.len() - zeros);
            }
            Padding::None => {}
        }
        Ok(())
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pkcs7" | "pkcs#7" => Ok(Padding::Pkcs7),
            "zero" | "zeros" => Ok(Padding::Zero),
            "none" => Ok(Padding::None),
            _ => Err(Error::UnsupportedPadding(s.to_owned())),
        }
    }
}
