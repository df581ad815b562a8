//! Errors raised while building key material.

use thiserror::Error;

/// Errors produced by the core cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Root key is not 16, 24 or 32 bytes long.
    #[error("invalid key length: got {got} bytes, expected 16, 24 or 32")]
    InvalidKeyLength {
        /// Length that was supplied.
        got: usize,
    },
}

/// Result alias for the core cipher.
pub type Result<T> = core::result::Result<T, Error>;
