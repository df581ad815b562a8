//! AES round transformations and their inverses.
//!
//! Every step works in place on a column-major [`Block`].

use crate::block::{state_get, xor_in_place, Block};
use crate::gf::gf_multiply;
use crate::sbox::{inv_sbox, sbox};

/// Coefficients of the MixColumns matrix.
pub const MIX_MATRIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

/// Coefficients of the inverse MixColumns matrix.
pub const INV_MIX_MATRIX: [[u8; 4]; 4] = [
    [14, 11, 13, 9],
    [9, 14, 11, 13],
    [13, 9, 14, 11],
    [11, 13, 9, 14],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = state_get(&src, row, (col + row) % 4);
        }
    }
}

/// Rotates row `r` right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[(col + row) % 4 * 4 + row] = state_get(&src, row, col);
        }
    }
}

fn mix_with(state: &mut Block, matrix: &[[u8; 4]; 4]) {
    for column in state.chunks_exact_mut(4) {
        let input = [column[0], column[1], column[2], column[3]];
        for (out, coeffs) in column.iter_mut().zip(matrix.iter()) {
            *out = coeffs
                .iter()
                .zip(input.iter())
                .fold(0u8, |acc, (&c, &b)| acc ^ gf_multiply(c, b));
        }
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    mix_with(state, &MIX_MATRIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    mix_with(state, &INV_MIX_MATRIX);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
