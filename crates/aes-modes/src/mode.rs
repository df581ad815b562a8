//! Block chaining modes.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Chaining mode applied across blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic codebook: every block is transformed independently.
    #[default]
    Ecb,
    /// Cipher block chaining: each block is XORed with the previous
    /// ciphertext block (or the IV) before encryption.
    Cbc,
}

impl Mode {
    /// Whether the mode consumes an initialization vector.
    pub const fn requires_iv(self) -> bool {
        matches!(self, Mode::Cbc)
    }

    /// Upper-case mode name.
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ECB" => Ok(Mode::Ecb),
            "CBC" => Ok(Mode::Cbc),
            _ => Err(Error::UnsupportedMode(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ecb".parse::<Mode>().unwrap(), Mode::Ecb);
        assert_eq!(" CBC ".parse::<Mode>().unwrap(), Mode::Cbc);
        assert_eq!(Mode::Cbc.to_string(), "CBC");
        assert_eq!(Mode::default(), Mode::Ecb);
    }

    #[test]
    fn rejects_unknown_modes() {
        let err = "CTR".parse::<Mode>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedMode(ref name) if name == "CTR"));
    }

    #[test]
    fn only_cbc_needs_iv() {
        assert!(Mode::Cbc.requires_iv());
        assert!(!Mode::Ecb.requires_iv());
    }
}
