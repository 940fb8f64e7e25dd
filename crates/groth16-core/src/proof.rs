//! Groth16 proof and calldata codec
//!
//! ## Calldata format (256 + 32·k bytes):
//!
//! | Offset | Field |
//! |---|---|
//! | 0 | A.x |
//! | 32 | A.y |
//! | 64 | B.x_im |
//! | 96 | B.x_re |
//! | 128 | B.y_im |
//! | 160 | B.y_re |
//! | 192 | C.x |
//! | 224 | C.y |
//! | 256 + 32·i | input_i |
//!
//! Every field is a 32-byte big-endian word. There is no selector or length
//! prefix: the blob length alone determines the input count, which must
//! match the key the verifier was built with.

use crate::constants::{FIELD_SIZE, G1_SIZE, G2_SIZE, PROOF_SIZE};
use crate::errors::CalldataError;
use crate::field::is_canonical_fr;
use crate::types::{Scalar, G1, G2};

/// Total calldata size for a circuit with `num_inputs` public inputs
pub const fn calldata_size(num_inputs: usize) -> usize {
    PROOF_SIZE + num_inputs * FIELD_SIZE
}

/// A Groth16 proof (A, B, C)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proof {
    pub a: G1,
    pub b: G2,
    pub c: G1,
}

impl Proof {
    /// Parse the 256-byte A || B || C prefix
    pub fn from_bytes(bytes: &[u8; PROOF_SIZE]) -> Self {
        let mut a = [0u8; G1_SIZE];
        let mut b = [0u8; G2_SIZE];
        let mut c = [0u8; G1_SIZE];
        a.copy_from_slice(&bytes[0..64]);
        b.copy_from_slice(&bytes[64..192]);
        c.copy_from_slice(&bytes[192..256]);
        Proof { a, b, c }
    }

    /// Serialize as A || B || C
    pub fn to_bytes(&self) -> [u8; PROOF_SIZE] {
        let mut out = [0u8; PROOF_SIZE];
        out[0..64].copy_from_slice(&self.a);
        out[64..192].copy_from_slice(&self.b);
        out[192..256].copy_from_slice(&self.c);
        out
    }
}

/// Decode calldata into a proof and exactly `N` public inputs.
///
/// Fails before any curve arithmetic if the length is not
/// `calldata_size(N)` or if an input is not below the scalar modulus.
pub fn decode<const N: usize>(bytes: &[u8]) -> Result<(Proof, [Scalar; N]), CalldataError> {
    let expected = calldata_size(N);
    if bytes.len() != expected {
        return Err(CalldataError::InvalidSize {
            expected,
            actual: bytes.len(),
        });
    }

    let (proof_bytes, input_bytes) = bytes.split_at(PROOF_SIZE);
    let mut prefix = [0u8; PROOF_SIZE];
    prefix.copy_from_slice(proof_bytes);
    let proof = Proof::from_bytes(&prefix);

    let mut inputs = [[0u8; FIELD_SIZE]; N];
    for (index, (input, word)) in inputs
        .iter_mut()
        .zip(input_bytes.chunks_exact(FIELD_SIZE))
        .enumerate()
    {
        input.copy_from_slice(word);
        if !is_canonical_fr(input) {
            return Err(CalldataError::InvalidScalar { index });
        }
    }

    Ok((proof, inputs))
}

/// Encode a proof and inputs into `out`, which must be exactly
/// `calldata_size(N)` bytes.
pub fn encode_into<const N: usize>(
    proof: &Proof,
    inputs: &[Scalar; N],
    out: &mut [u8],
) -> Result<(), CalldataError> {
    let expected = calldata_size(N);
    if out.len() != expected {
        return Err(CalldataError::InvalidSize {
            expected,
            actual: out.len(),
        });
    }
    if let Some(index) = inputs.iter().position(|input| !is_canonical_fr(input)) {
        return Err(CalldataError::InvalidScalar { index });
    }

    let (proof_out, inputs_out) = out.split_at_mut(PROOF_SIZE);
    proof_out.copy_from_slice(&proof.to_bytes());
    for (word, input) in inputs_out.chunks_exact_mut(FIELD_SIZE).zip(inputs) {
        word.copy_from_slice(input);
    }

    Ok(())
}
