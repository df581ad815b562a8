//! Encrypts a short message in ECB and CBC mode and decrypts it back.

use aes_modes::{generate_iv, Cipher, Mode};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() {
    // Deterministic seed for reproducibility in the example.
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").expect("valid hex");
    let message = "first block heresecond block";

    let ecb = Cipher::new(&key, Mode::Ecb).expect("valid key");
    let ecb_hex = ecb.encrypt_text(message).expect("encrypt");
    assert_eq!(ecb.decrypt_text(&ecb_hex).expect("decrypt"), message);

    let iv = generate_iv(&mut rng);
    let cbc = Cipher::new(&key, Mode::Cbc)
        .and_then(|cipher| cipher.with_iv(&iv))
        .expect("valid key and iv");
    let cbc_hex = cbc.encrypt_text(message).expect("encrypt");
    assert_eq!(cbc.decrypt_text(&cbc_hex).expect("decrypt"), message);

    println!("ECB: {ecb_hex}");
    println!("CBC: {cbc_hex} (iv {})", hex::encode(iv));
    println!("example succeeded; both modes round-trip");
}
