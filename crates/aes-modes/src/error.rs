//! Error type for the chaining-mode driver.

use thiserror::Error;

/// Errors returned by encryption, decryption and configuration calls.
#[derive(Debug, Error)]
pub enum Error {
    /// Key material was rejected by the core cipher.
    #[error(transparent)]
    Core(#[from] aes_core::Error),

    /// CBC was requested without an initialization vector.
    #[error("CBC mode requires an initialization vector")]
    MissingIv,

    /// IV present but not exactly one block long.
    #[error("invalid IV length: got {got} bytes, expected 16")]
    InvalidIvLength {
        /// Length that was supplied.
        got: usize,
    },

    /// Ciphertext is not a whole number of blocks.
    #[error("invalid ciphertext length: {got} bytes is not a multiple of 16")]
    InvalidCiphertextLength {
        /// Length that was supplied.
        got: usize,
    },

    /// Padding is disabled and the plaintext is not a whole number of blocks.
    #[error("invalid plaintext length: {got} bytes is not a multiple of 16 and padding is disabled")]
    InvalidPlaintextLength {
        /// Length that was supplied.
        got: usize,
    },

    /// PKCS#7 padding bytes did not check out after decryption.
    #[error("invalid padding")]
    InvalidPadding,

    /// Mode name outside `ECB`/`CBC`.
    #[error("unsupported mode: {0} (expected ECB or CBC)")]
    UnsupportedMode(String),

    /// Padding name outside `pkcs7`/`zero`/`none`.
    #[error("unsupported padding: {0} (expected pkcs7, zero or none)")]
    UnsupportedPadding(String),

    /// Hex input could not be decoded.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Decrypted bytes are not valid UTF-8.
    #[error("decrypted data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
