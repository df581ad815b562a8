//! Arithmetic in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.

/// Low byte of the AES reduction polynomial (0x11b).
pub const REDUCTION: u8 = 0x1b;

/// Field addition, which is plain XOR.
#[inline]
pub const fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies by `x`, reducing when the high bit falls off.
#[inline]
pub const fn xtime(a: u8) -> u8 {
    let shifted = a << 1;
    if a & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Carry-less multiplication followed by modular reduction.
pub const fn gf_multiply(a: u8, b: u8) -> u8 {
    let mut a = a;
    let mut b = b;
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Multiplicative inverse, computed as `a^254`. Zero maps to zero.
pub const fn gf_inverse(a: u8) -> u8 {
    // a^254 = a^(2+4+8+16+32+64+128)
    let mut result = 1u8;
    let mut square = gf_multiply(a, a);
    let mut i = 1;
    while i < 8 {
        result = gf_multiply(result, square);
        square = gf_multiply(square, square);
        i += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_matches_fips_examples() {
        assert_eq!(gf_multiply(0x57, 0x83), 0xc1);
        assert_eq!(gf_multiply(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
    }

    #[test]
    fn multiply_is_commutative_with_identity() {
        for a in 0..=255u8 {
            assert_eq!(gf_multiply(a, 1), a);
            assert_eq!(gf_multiply(a, 0), 0);
            for b in [0x02u8, 0x03, 0x09, 0x0b, 0x0d, 0x0e, 0xff] {
                assert_eq!(gf_multiply(a, b), gf_multiply(b, a));
            }
        }
    }

    #[test]
    fn inverse_of_every_nonzero_element() {
        assert_eq!(gf_inverse(0), 0);
        assert_eq!(gf_inverse(1), 1);
        assert_eq!(gf_inverse(0x53), 0xca);
        for a in 1..=255u8 {
            assert_eq!(gf_multiply(a, gf_inverse(a)), 1, "a = {a:#04x}");
        }
    }

    #[test]
    fn add_is_xor() {
        assert_eq!(gf_add(0x57, 0x83), 0xd4);
        assert_eq!(gf_add(0xff, 0xff), 0);
    }
}
