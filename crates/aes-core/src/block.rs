//! Block representation helpers.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, laid out column-major: byte `i` sits at
/// row `i % 4`, column `i / 4` of the state matrix.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns the byte at (`row`, `col`) of the state matrix.
#[inline]
pub fn state_get(state: &Block, row: usize, col: usize) -> u8 {
    state[col * 4 + row]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_self_inverse() {
        let original: Block = core::array::from_fn(|i| i as u8);
        let mask = [0xa5u8; BLOCK_SIZE];
        let mut block = original;
        xor_in_place(&mut block, &mask);
        assert_ne!(block, original);
        xor_in_place(&mut block, &mask);
        assert_eq!(block, original);
    }

    #[test]
    fn state_is_column_major() {
        let block: Block = core::array::from_fn(|i| i as u8);
        assert_eq!(state_get(&block, 1, 0), 1);
        assert_eq!(state_get(&block, 0, 1), 4);
        assert_eq!(state_get(&block, 3, 3), 15);
    }
}
