//! BN254 operations using Solana syscalls
//!
//! The verifier never calls the syscalls directly: it goes through the
//! [`Bn254Host`] trait, so the same verification code runs against the
//! `alt_bn128` syscalls on-chain, the arkworks fallback that `solana-bn254`
//! uses off-chain, or a test double.
//!
//! All inputs are packed into fixed-size stack buffers.

use crate::constants::{
    G1_ADD_INPUT_SIZE, G1_MUL_INPUT_SIZE, G1_SIZE, GROTH16_PAIRS, PAIRING_ELEMENT_SIZE,
    PAIRING_INPUT_SIZE, RESULT_SIZE,
};
use crate::errors::{Bn254Error, Primitive};
use crate::field::fq_neg;
use crate::types::{Scalar, G1, G1_IDENTITY, G2};
use solana_bn254::prelude::{
    alt_bn128_g1_addition_be, alt_bn128_g1_multiplication_be, alt_bn128_pairing_be,
};

/// The three curve services provided by the execution environment.
pub trait Bn254Host {
    /// G1 addition over `p1 || p2`
    fn g1_addition(&self, input: &[u8; G1_ADD_INPUT_SIZE]) -> Result<G1, Bn254Error>;

    /// G1 scalar multiplication over `p || s`
    fn g1_multiplication(&self, input: &[u8; G1_MUL_INPUT_SIZE]) -> Result<G1, Bn254Error>;

    /// Multi-pairing check over `GROTH16_PAIRS` packed (G1, G2) pairs.
    /// Returns the raw 32-byte result word.
    fn pairing(&self, input: &[u8; PAIRING_INPUT_SIZE]) -> Result<[u8; RESULT_SIZE], Bn254Error>;
}

/// `alt_bn128` syscalls (host-accelerated on Solana, arkworks elsewhere)
///
/// `solana-bn254` hands each result back in a `Vec`, so every call through
/// this binding allocates once for its output. Inputs stay on the stack and
/// the output is copied into a fixed-size array before returning.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltBn128;

impl Bn254Host for AltBn128 {
    fn g1_addition(&self, input: &[u8; G1_ADD_INPUT_SIZE]) -> Result<G1, Bn254Error> {
        let op = Primitive::Addition;
        let result =
            alt_bn128_g1_addition_be(input).map_err(|_| Bn254Error::PrimitiveCallFailed { op })?;
        to_g1(op, &result)
    }

    fn g1_multiplication(&self, input: &[u8; G1_MUL_INPUT_SIZE]) -> Result<G1, Bn254Error> {
        let op = Primitive::Multiplication;
        let result = alt_bn128_g1_multiplication_be(input)
            .map_err(|_| Bn254Error::PrimitiveCallFailed { op })?;
        to_g1(op, &result)
    }

    fn pairing(&self, input: &[u8; PAIRING_INPUT_SIZE]) -> Result<[u8; RESULT_SIZE], Bn254Error> {
        let op = Primitive::Pairing;
        let result =
            alt_bn128_pairing_be(input).map_err(|_| Bn254Error::PrimitiveCallFailed { op })?;
        result
            .as_slice()
            .try_into()
            .map_err(|_| Bn254Error::UnexpectedOutput {
                op,
                len: result.len(),
            })
    }
}

fn to_g1(op: Primitive, output: &[u8]) -> Result<G1, Bn254Error> {
    output.try_into().map_err(|_| Bn254Error::UnexpectedOutput {
        op,
        len: output.len(),
    })
}

/// Performs G1 addition through the host addition service.
pub fn g1_add<H: Bn254Host + ?Sized>(host: &H, a: &G1, b: &G1) -> Result<G1, Bn254Error> {
    let mut input = [0u8; G1_ADD_INPUT_SIZE];
    input[..G1_SIZE].copy_from_slice(a);
    input[G1_SIZE..].copy_from_slice(b);
    host.g1_addition(&input)
}

/// Performs G1 scalar multiplication through the host multiplication service.
pub fn g1_mul<H: Bn254Host + ?Sized>(host: &H, point: &G1, scalar: &Scalar) -> Result<G1, Bn254Error> {
    let mut input = [0u8; G1_MUL_INPUT_SIZE];
    input[..G1_SIZE].copy_from_slice(point);
    input[G1_SIZE..].copy_from_slice(scalar);
    host.g1_multiplication(&input)
}

/// Negates a G1 point (negate y coordinate). Pure, no host call.
///
/// The identity is returned unchanged. A y coordinate that is not a
/// canonical base field element is rejected.
pub fn g1_neg(point: &G1) -> Result<G1, Bn254Error> {
    if *point == G1_IDENTITY {
        return Ok(G1_IDENTITY);
    }

    let mut y = [0u8; 32];
    y.copy_from_slice(&point[32..64]);
    let neg_y = fq_neg(&y).ok_or(Bn254Error::InvalidG1)?;

    let mut result = *point;
    result[32..64].copy_from_slice(&neg_y);
    Ok(result)
}

/// Performs the Groth16 multi-pairing check.
/// Returns true if ∏ e(a_i, b_i) == 1 (identity in GT)
///
/// Pair `i` occupies words `6i..6i+6` as
/// `G1.x, G1.y, G2.x_im, G2.x_re, G2.y_im, G2.y_re`.
pub fn pairing_check<H: Bn254Host + ?Sized>(
    host: &H,
    pairs: &[(G1, G2); GROTH16_PAIRS],
) -> Result<bool, Bn254Error> {
    let mut input = [0u8; PAIRING_INPUT_SIZE];
    for (chunk, (g1, g2)) in input.chunks_exact_mut(PAIRING_ELEMENT_SIZE).zip(pairs) {
        chunk[..G1_SIZE].copy_from_slice(g1);
        chunk[G1_SIZE..].copy_from_slice(g2);
    }

    let result = host.pairing(&input)?;

    // The syscall returns 32 bytes, with 0x01 in the last byte if the pairing check passes
    if result[..RESULT_SIZE - 1].iter().any(|&b| b != 0) || result[RESULT_SIZE - 1] > 1 {
        return Err(Bn254Error::UnexpectedOutput {
            op: Primitive::Pairing,
            len: result.len(),
        });
    }

    Ok(result[RESULT_SIZE - 1] == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{scalar_from_u64, FQ_MODULUS, G1_GENERATOR, G2_IDENTITY, SCALAR_ZERO};
    use std::cell::RefCell;
    use std::vec::Vec;

    /// Records the raw pairing input and answers with a fixed word
    struct RecordingHost {
        pairing_input: RefCell<Vec<u8>>,
        answer: [u8; 32],
    }

    impl Bn254Host for RecordingHost {
        fn g1_addition(&self, _input: &[u8; G1_ADD_INPUT_SIZE]) -> Result<G1, Bn254Error> {
            Err(Bn254Error::PrimitiveCallFailed {
                op: Primitive::Addition,
            })
        }

        fn g1_multiplication(&self, _input: &[u8; G1_MUL_INPUT_SIZE]) -> Result<G1, Bn254Error> {
            Err(Bn254Error::PrimitiveCallFailed {
                op: Primitive::Multiplication,
            })
        }

        fn pairing(&self, input: &[u8; PAIRING_INPUT_SIZE]) -> Result<[u8; 32], Bn254Error> {
            *self.pairing_input.borrow_mut() = input.to_vec();
            Ok(self.answer)
        }
    }

    fn recording(last_byte: u8) -> RecordingHost {
        let mut answer = [0u8; 32];
        answer[31] = last_byte;
        RecordingHost {
            pairing_input: RefCell::new(Vec::new()),
            answer,
        }
    }

    #[test]
    fn test_g1_neg_identity() {
        let neg = g1_neg(&G1_IDENTITY).unwrap();
        assert_eq!(neg, G1_IDENTITY);
    }

    #[test]
    fn test_g1_neg_generator() {
        // -G = (1, q - 2)
        let neg = g1_neg(&G1_GENERATOR).unwrap();
        let mut expected_y = FQ_MODULUS;
        expected_y[31] -= 2;
        assert_eq!(&neg[..32], &G1_GENERATOR[..32]);
        assert_eq!(&neg[32..], &expected_y);
        assert_eq!(g1_neg(&neg).unwrap(), G1_GENERATOR);
    }

    #[test]
    fn test_g1_neg_rejects_non_canonical_y() {
        let mut point = G1_GENERATOR;
        point[32..].copy_from_slice(&FQ_MODULUS);
        assert_eq!(g1_neg(&point), Err(Bn254Error::InvalidG1));
    }

    #[test]
    fn test_syscall_add_and_mul_agree() {
        // G + G == 2·G
        let doubled = g1_add(&AltBn128, &G1_GENERATOR, &G1_GENERATOR).unwrap();
        let scaled = g1_mul(&AltBn128, &G1_GENERATOR, &scalar_from_u64(2)).unwrap();
        assert_eq!(doubled, scaled);

        // G + (-G) == O
        let neg = g1_neg(&G1_GENERATOR).unwrap();
        assert_eq!(g1_add(&AltBn128, &G1_GENERATOR, &neg).unwrap(), G1_IDENTITY);

        // 0·G == O
        assert_eq!(
            g1_mul(&AltBn128, &G1_GENERATOR, &SCALAR_ZERO).unwrap(),
            G1_IDENTITY
        );
    }

    #[test]
    fn test_syscall_add_rejects_point_off_curve() {
        let mut bad = G1_GENERATOR;
        bad[63] = 3; // (1, 3) is not on y^2 = x^3 + 3
        let err = g1_add(&AltBn128, &bad, &G1_GENERATOR).unwrap_err();
        assert_eq!(
            err,
            Bn254Error::PrimitiveCallFailed {
                op: Primitive::Addition
            }
        );
    }

    #[test]
    fn test_pairing_of_identities_is_one() {
        let pairs = [(G1_IDENTITY, G2_IDENTITY); GROTH16_PAIRS];
        assert!(pairing_check(&AltBn128, &pairs).unwrap());
    }

    #[test]
    fn test_pairing_packing_order() {
        let host = recording(1);
        let mut pairs = [(G1_IDENTITY, G2_IDENTITY); GROTH16_PAIRS];
        for (i, (g1, g2)) in pairs.iter_mut().enumerate() {
            for (w, word) in g1.chunks_exact_mut(32).enumerate() {
                word[31] = (i * 6 + w) as u8;
            }
            for (w, word) in g2.chunks_exact_mut(32).enumerate() {
                word[31] = (i * 6 + 2 + w) as u8;
            }
        }

        assert!(pairing_check(&host, &pairs).unwrap());

        // 24 words, numbered 0..24 in pair order
        let input = host.pairing_input.borrow();
        assert_eq!(input.len(), 768);
        for (n, word) in input.chunks_exact(32).enumerate() {
            assert_eq!(word[31] as usize, n);
        }
    }

    #[test]
    fn test_pairing_result_interpretation() {
        let pairs = [(G1_IDENTITY, G2_IDENTITY); GROTH16_PAIRS];
        assert!(!pairing_check(&recording(0), &pairs).unwrap());
        assert!(matches!(
            pairing_check(&recording(2), &pairs),
            Err(Bn254Error::UnexpectedOutput { .. })
        ));
    }
}
