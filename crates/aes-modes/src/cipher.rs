//! Chaining-mode driver and the keyed [`Cipher`] handle.

use core::fmt;

use aes_core::{expand_key, AesKey, Block, KeySize, RoundKeys, BLOCK_SIZE};

use crate::config::CipherConfig;
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::{cbc, codec, ecb};

fn parse_iv(iv: &[u8]) -> Result<Block> {
    iv.try_into()
        .map_err(|_| Error::InvalidIvLength { got: iv.len() })
}

fn resolve_iv(mode: Mode, iv: Option<&[u8]>) -> Result<Option<Block>> {
    let iv = iv.map(parse_iv).transpose()?;
    if mode.requires_iv() && iv.is_none() {
        return Err(Error::MissingIv);
    }
    Ok(iv)
}

/// Pads `plaintext` and encrypts it under `round_keys`.
///
/// `iv` is required for [`Mode::Cbc`] and ignored by [`Mode::Ecb`]; when
/// present it must be 16 bytes in either mode. The caller must supply a fresh
/// IV for every message encrypted under the same key.
pub fn encrypt_with(
    plaintext: &[u8],
    round_keys: &RoundKeys,
    mode: Mode,
    iv: Option<&[u8]>,
    config: &CipherConfig,
) -> Result<Vec<u8>> {
    let iv = resolve_iv(mode, iv)?;
    let mut data = config.padding.pad(plaintext)?;
    log::debug!(
        "{} {} encrypt: {} bytes in, {} blocks, padding {}, {} worker(s)",
        round_keys.key_size(),
        mode,
        plaintext.len(),
        data.len() / BLOCK_SIZE,
        config.padding,
        config.workers
    );
    match (mode, iv) {
        (Mode::Ecb, _) => ecb::encrypt_blocks(&mut data, round_keys, config.workers)?,
        (Mode::Cbc, Some(iv)) => cbc::encrypt_blocks(&mut data, round_keys, &iv)?,
        (Mode::Cbc, None) => return Err(Error::MissingIv),
    }
    Ok(data)
}

/// Decrypts `ciphertext` under `round_keys` and strips padding.
pub fn decrypt_with(
    ciphertext: &[u8],
    round_keys: &RoundKeys,
    mode: Mode,
    iv: Option<&[u8]>,
    config: &CipherConfig,
) -> Result<Vec<u8>> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertextLength {
            got: ciphertext.len(),
        });
    }
    let iv = resolve_iv(mode, iv)?;
    log::debug!(
        "{} {} decrypt: {} blocks, padding {}, {} worker(s)",
        round_keys.key_size(),
        mode,
        ciphertext.len() / BLOCK_SIZE,
        config.padding,
        config.workers
    );
    let mut data = ciphertext.to_vec();
    match (mode, iv) {
        (Mode::Ecb, _) => ecb::decrypt_blocks(&mut data, round_keys, config.workers)?,
        (Mode::Cbc, Some(iv)) => cbc::decrypt_blocks(&mut data, round_keys, &iv, config.workers)?,
        (Mode::Cbc, None) => return Err(Error::MissingIv),
    }
    config.padding.unpad(&mut data)?;
    Ok(data)
}

/// Encrypts `plaintext` under a raw key with the default configuration.
pub fn encrypt(plaintext: &[u8], key: &[u8], mode: Mode, iv: Option<&[u8]>) -> Result<Vec<u8>> {
    let key = AesKey::from_slice(key)?;
    encrypt_with(
        plaintext,
        &expand_key(&key),
        mode,
        iv,
        &CipherConfig::default(),
    )
}

/// Decrypts `ciphertext` under a raw key with the default configuration.
pub fn decrypt(ciphertext: &[u8], key: &[u8], mode: Mode, iv: Option<&[u8]>) -> Result<Vec<u8>> {
    let key = AesKey::from_slice(key)?;
    decrypt_with(
        ciphertext,
        &expand_key(&key),
        mode,
        iv,
        &CipherConfig::default(),
    )
}

/// A keyed AES instance with a chaining mode, optional IV and configuration.
///
/// The round keys are derived once at construction (or on [`Cipher::set_key`])
/// and shared read-only by every call, so a `Cipher` can be used from several
/// threads at once.
#[derive(Clone)]
pub struct Cipher {
    round_keys: RoundKeys,
    mode: Mode,
    iv: Option<Block>,
    config: CipherConfig,
}

impl Cipher {
    /// Creates a cipher with the default configuration.
    pub fn new(key: &[u8], mode: Mode) -> Result<Self> {
        Self::with_config(key, mode, CipherConfig::default())
    }

    /// Creates a cipher with an explicit configuration.
    pub fn with_config(key: &[u8], mode: Mode, config: CipherConfig) -> Result<Self> {
        let key = AesKey::from_slice(key)?;
        Ok(Self::from_key(&key, mode, config))
    }

    /// Creates a cipher from an already validated key.
    pub fn from_key(key: &AesKey, mode: Mode, config: CipherConfig) -> Self {
        Self {
            round_keys: expand_key(key),
            mode,
            iv: None,
            config,
        }
    }

    /// Returns the cipher with `iv` installed.
    pub fn with_iv(mut self, iv: &[u8]) -> Result<Self> {
        self.set_iv(iv)?;
        Ok(self)
    }

    /// Installs the IV used by CBC calls.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<()> {
        self.iv = Some(parse_iv(iv)?);
        Ok(())
    }

    /// Removes the IV.
    pub fn clear_iv(&mut self) {
        self.iv = None;
    }

    /// Replaces the key and re-derives the round keys.
    pub fn set_key(&mut self, key: &[u8]) -> Result<()> {
        let key = AesKey::from_slice(key)?;
        self.round_keys = expand_key(&key);
        Ok(())
    }

    /// Switches the chaining mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: CipherConfig) {
        self.config = config;
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current IV, if any.
    pub fn iv(&self) -> Option<&Block> {
        self.iv.as_ref()
    }

    /// Size of the installed key.
    pub fn key_size(&self) -> KeySize {
        self.round_keys.key_size()
    }

    /// Expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Current configuration.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Encrypts `plaintext`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        encrypt_with(
            plaintext,
            &self.round_keys,
            self.mode,
            self.iv.as_ref().map(|iv| &iv[..]),
            &self.config,
        )
    }

    /// Decrypts `ciphertext`.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        decrypt_with(
            ciphertext,
            &self.round_keys,
            self.mode,
            self.iv.as_ref().map(|iv| &iv[..]),
            &self.config,
        )
    }

    /// Encrypts UTF-8 text and returns lower-case hex.
    pub fn encrypt_text(&self, text: &str) -> Result<String> {
        Ok(codec::encode_hex(self.encrypt(text.as_bytes())?))
    }

    /// Decrypts hex ciphertext back into UTF-8 text.
    pub fn decrypt_text(&self, hex_ciphertext: &str) -> Result<String> {
        let ciphertext = codec::decode_hex(hex_ciphertext)?;
        Ok(String::from_utf8(self.decrypt(&ciphertext)?)?)
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("key_size", &self.key_size())
            .field("mode", &self.mode)
            .field("iv", &self.iv.as_ref().map(codec::encode_hex))
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::Padding;

    const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
    const IV: &str = "000102030405060708090a0b0c0d0e0f";

    fn key() -> Vec<u8> {
        hex::decode(KEY).unwrap()
    }

    fn iv() -> Vec<u8> {
        hex::decode(IV).unwrap()
    }

    #[test]
    fn cbc_without_iv_is_rejected() {
        let err = encrypt(b"data", &key(), Mode::Cbc, None).unwrap_err();
        assert!(matches!(err, Error::MissingIv));
        let err = decrypt(&[0u8; 16], &key(), Mode::Cbc, None).unwrap_err();
        assert!(matches!(err, Error::MissingIv));
        let cipher = Cipher::new(&key(), Mode::Cbc).unwrap();
        assert!(matches!(cipher.encrypt(b"data"), Err(Error::MissingIv)));
    }

    #[test]
    fn short_iv_is_rejected() {
        let err = encrypt(b"data", &key(), Mode::Cbc, Some(&[0u8; 8][..])).unwrap_err();
        assert!(matches!(err, Error::InvalidIvLength { got: 8 }));
        let err = Cipher::new(&key(), Mode::Cbc)
            .unwrap()
            .with_iv(&[0u8; 17])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidIvLength { got: 17 }));
    }

    #[test]
    fn bad_key_is_rejected() {
        let err = Cipher::new(&[0u8; 15], Mode::Ecb).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(aes_core::Error::InvalidKeyLength { got: 15 })
        ));
        let err = encrypt(b"x", &[0u8; 33], Mode::Ecb, None).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(aes_core::Error::InvalidKeyLength { got: 33 })
        ));
    }

    #[test]
    fn ragged_ciphertext_is_rejected() {
        let err = decrypt(&[0u8; 17], &key(), Mode::Ecb, None).unwrap_err();
        assert!(matches!(err, Error::InvalidCiphertextLength { got: 17 }));
    }

    #[test]
    fn ecb_ignores_iv() {
        let with = encrypt(b"hello", &key(), Mode::Ecb, Some(iv().as_slice())).unwrap();
        let without = encrypt(b"hello", &key(), Mode::Ecb, None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn unpadded_cbc_matches_first_sp800_block() {
        let cipher = Cipher::with_config(
            &key(),
            Mode::Cbc,
            CipherConfig::default().with_padding(Padding::None),
        )
        .unwrap()
        .with_iv(&iv())
        .unwrap();
        let ct = cipher
            .encrypt(&hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap())
            .unwrap();
        assert_eq!(hex::encode(ct), "7649abac8119b246cee98e9b12e9197d");
    }

    #[test]
    fn text_round_trip_in_both_modes() {
        let message = "Two households, both alike in dignity";
        for mode in [Mode::Ecb, Mode::Cbc] {
            let cipher = Cipher::new(&key(), mode).unwrap().with_iv(&iv()).unwrap();
            let hex_ct = cipher.encrypt_text(message).unwrap();
            assert_eq!(hex_ct.len(), 96);
            assert_eq!(cipher.decrypt_text(&hex_ct).unwrap(), message);
        }
    }

    #[test]
    fn setters_change_behaviour() {
        let mut cipher = Cipher::new(&key(), Mode::Ecb).unwrap();
        let ecb = cipher.encrypt(b"sixteen byte msg").unwrap();
        cipher.set_mode(Mode::Cbc);
        cipher.set_iv(&iv()).unwrap();
        let cbc = cipher.encrypt(b"sixteen byte msg").unwrap();
        assert_ne!(ecb, cbc);

        cipher.set_key(&[1u8; 32]).unwrap();
        assert_eq!(cipher.key_size(), KeySize::Aes256);
        assert_eq!(cipher.round_keys().rounds(), 14);
        cipher.clear_iv();
        assert!(cipher.iv().is_none());
        assert!(cipher.set_key(&[1u8; 7]).is_err());
        assert_eq!(cipher.key_size(), KeySize::Aes256);

        cipher.set_config(CipherConfig::default().with_padding(Padding::Zero));
        assert_eq!(cipher.config().padding, Padding::Zero);
    }

    #[test]
    fn debug_omits_key_bytes() {
        let cipher = Cipher::new(&key(), Mode::Cbc).unwrap().with_iv(&iv()).unwrap();
        let text = format!("{cipher:?}");
        assert!(text.contains("Aes128"));
        assert!(text.contains(IV));
        assert!(!text.contains(KEY));
    }

    #[test]
    fn cipher_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cipher>();

        let cipher = Cipher::new(&key(), Mode::Ecb).unwrap();
        let expected = cipher.encrypt(b"shared").unwrap();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| assert_eq!(cipher.encrypt(b"shared").unwrap(), expected));
            }
        });
    }
}
