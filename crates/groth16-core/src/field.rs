//! Big-endian 256-bit helpers for BN254 field words
//!
//! Only the two operations the verifier needs: range checks against the
//! field moduli and negation in the base field. Values are kept as
//! 4 x 64-bit little-endian limbs while computing.

use crate::types::{Scalar, SCALAR_ZERO};

/// BN254 scalar field modulus r
pub const R: [u64; 4] = [
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// BN254 base field modulus q
pub const Q: [u64; 4] = [
    0x3c208c16d87cfd47,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// Convert a 32-byte big-endian word to 4 x u64 limbs (little-endian limbs)
#[inline]
pub fn to_limbs(word: &Scalar) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = 24 - i * 8;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&word[start..start + 8]);
        *limb = u64::from_be_bytes(bytes);
    }
    limbs
}

/// Convert 4 x u64 limbs (little-endian) to a 32-byte big-endian word
#[inline]
pub fn from_limbs(limbs: &[u64; 4]) -> Scalar {
    let mut word = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = 24 - i * 8;
        word[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
    word
}

/// Subtract with borrow, returning (result, borrow)
#[inline]
fn sbb_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let mut result = [0u64; 4];
    let mut borrow = 0u64;

    for i in 0..4 {
        let (diff1, borrow1) = a[i].overflowing_sub(b[i]);
        let (diff2, borrow2) = diff1.overflowing_sub(borrow);
        result[i] = diff2;
        borrow = (borrow1 as u64) | (borrow2 as u64);
    }

    (result, borrow)
}

/// True if `word < modulus`
#[inline]
fn is_below(word: &Scalar, modulus: &[u64; 4]) -> bool {
    let (_, borrow) = sbb_limbs(&to_limbs(word), modulus);
    borrow != 0
}

/// True if the word is a canonical scalar field element (< r)
pub fn is_canonical_fr(word: &Scalar) -> bool {
    is_below(word, &R)
}

/// True if the word is a canonical base field element (< q)
pub fn is_canonical_fq(word: &Scalar) -> bool {
    is_below(word, &Q)
}

/// Negate a base field element: q - a, with -0 = 0.
///
/// Returns `None` if `a` is not canonical.
pub fn fq_neg(a: &Scalar) -> Option<Scalar> {
    if *a == SCALAR_ZERO {
        return Some(SCALAR_ZERO);
    }
    if !is_canonical_fq(a) {
        return None;
    }
    let (result, _) = sbb_limbs(&Q, &to_limbs(a));
    Some(from_limbs(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{scalar_from_u64, FQ_MODULUS, FR_MODULUS, SCALAR_ONE};

    #[test]
    fn test_limbs_match_byte_moduli() {
        assert_eq!(from_limbs(&R), FR_MODULUS);
        assert_eq!(from_limbs(&Q), FQ_MODULUS);
        assert_eq!(to_limbs(&FR_MODULUS), R);
    }

    #[test]
    fn test_fr_range_check() {
        assert!(is_canonical_fr(&SCALAR_ZERO));
        assert!(is_canonical_fr(&scalar_from_u64(12)));

        // r - 1 is the largest canonical scalar
        let (r_minus_one, _) = sbb_limbs(&R, &to_limbs(&SCALAR_ONE));
        assert!(is_canonical_fr(&from_limbs(&r_minus_one)));

        assert!(!is_canonical_fr(&FR_MODULUS));
        assert!(!is_canonical_fr(&[0xff; 32]));
        // q > r, so q is out of range for Fr as well
        assert!(!is_canonical_fr(&FQ_MODULUS));
    }

    #[test]
    fn test_fq_neg() {
        assert_eq!(fq_neg(&SCALAR_ZERO), Some(SCALAR_ZERO));

        // -2 = q - 2
        let neg_two = fq_neg(&scalar_from_u64(2)).unwrap();
        let mut expected = FQ_MODULUS;
        expected[31] -= 2;
        assert_eq!(neg_two, expected);

        // Negation is an involution
        assert_eq!(fq_neg(&neg_two), Some(scalar_from_u64(2)));

        assert_eq!(fq_neg(&FQ_MODULUS), None);
    }
}
