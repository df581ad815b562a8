//! Cipher configuration.

use crate::padding::Padding;

/// Options shared by every encrypt/decrypt call of a cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherConfig {
    /// Padding scheme applied before encryption and removed after decryption.
    pub padding: Padding,
    /// Worker threads for block-parallel work (ECB, CBC decryption).
    /// Values of 0 or 1 keep everything on the calling thread.
    pub workers: usize,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            padding: Padding::Pkcs7,
            workers: 1,
        }
    }
}

impl CipherConfig {
    /// Returns the config with `padding` set.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Returns the config with `workers` set.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Returns the config with one worker per available CPU.
    pub fn with_available_parallelism(self) -> Self {
        let workers = std::thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(1);
        self.with_workers(workers)
    }
}
