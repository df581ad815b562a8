//! Substitution tables and round constants, built at compile time.

use crate::gf::{gf_inverse, xtime};

const fn affine(x: u8) -> u8 {
    x ^ x.rotate_left(1) ^ x.rotate_left(2) ^ x.rotate_left(3) ^ x.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(gf_inverse(i as u8));
        i += 1;
    }
    table
}

const fn invert_table(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const fn build_rcon() -> [u8; 10] {
    let mut table = [0u8; 10];
    let mut value = 1u8;
    let mut i = 0;
    while i < 10 {
        table[i] = value;
        value = xtime(value);
        i += 1;
    }
    table
}

/// Forward S-box.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse S-box.
pub const INV_SBOX: [u8; 256] = invert_table(&SBOX);

/// Round constants `x^(i-1)` for `i = 1..=10`. AES-128 consumes all ten,
/// AES-192 eight and AES-256 seven.
pub const RCON: [u8; 10] = build_rcon();

/// Looks up `byte` in the forward S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Looks up `byte` in the inverse S-box.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}
