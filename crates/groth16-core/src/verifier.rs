//! Groth16 verification logic
//!
//! Checks
//!
//! ```text
//! e(-A, B) · e(α, β) · e(vk_x, γ) · e(C, δ) == 1
//! ```
//!
//! where `vk_x = gamma_abc[0] + Σ input_i · gamma_abc[i + 1]`, using one
//! multi-pairing host call. All curve arithmetic goes through [`Bn254Host`].

use crate::errors::{CalldataError, VerifyError};
use crate::field::is_canonical_fr;
use crate::key::VerifyingKey;
use crate::ops::{self, Bn254Host};
use crate::proof::{self, Proof};
use crate::types::{Scalar, G1};
use crate::{dbg_fr, dbg_g1, trace};

/// Verify a Groth16 proof against `vk` using the given host.
///
/// `IC` must equal `N + 1`. Returns `Ok(false)` when the pairing check ran
/// and rejected the proof, and an error when the check could not run.
pub fn verify<H: Bn254Host + ?Sized, const IC: usize, const N: usize>(
    host: &H,
    vk: &VerifyingKey<IC>,
    proof: &Proof,
    public_inputs: &[Scalar; N],
) -> Result<bool, VerifyError> {
    if IC != N + 1 {
        return Err(VerifyError::InputArityMismatch {
            expected: IC.saturating_sub(1),
            actual: N,
        });
    }
    if let Some(index) = public_inputs.iter().position(|s| !is_canonical_fr(s)) {
        return Err(CalldataError::InvalidScalar { index }.into());
    }

    trace!("===== GROTH16 VERIFY: {} public inputs =====", N);

    let vk_x = prepare_inputs(host, vk, public_inputs)?;
    dbg_g1!("vk_x", &vk_x);

    let neg_a = ops::g1_neg(&proof.a)?;
    dbg_g1!("-A", &neg_a);

    let pairs = [
        (neg_a, proof.b),
        (vk.alpha_g1, vk.beta_g2),
        (vk_x, vk.gamma_g2),
        (proof.c, vk.delta_g2),
    ];
    let valid = ops::pairing_check(host, &pairs)?;

    trace!("pairing check: {}", valid);
    Ok(valid)
}

/// Linear combination of the input commitments, accumulated left to right
fn prepare_inputs<H: Bn254Host + ?Sized, const IC: usize, const N: usize>(
    host: &H,
    vk: &VerifyingKey<IC>,
    public_inputs: &[Scalar; N],
) -> Result<G1, VerifyError> {
    let mut acc = vk.gamma_abc_g1[0];
    for (input, point) in public_inputs.iter().zip(&vk.gamma_abc_g1[1..]) {
        dbg_fr!("input", input);
        let term = ops::g1_mul(host, point, input)?;
        acc = ops::g1_add(host, &acc, &term)?;
    }
    Ok(acc)
}

/// A host bound to one verifying key.
///
/// The key is private and cannot be replaced after construction, so a
/// `static` verifier always checks against the same circuit.
#[derive(Debug, Clone, Copy)]
pub struct Verifier<H, const IC: usize> {
    key: VerifyingKey<IC>,
    host: H,
}

impl<H: Bn254Host, const IC: usize> Verifier<H, IC> {
    pub const fn new(key: VerifyingKey<IC>, host: H) -> Self {
        Self { key, host }
    }

    /// The embedded verifying key
    pub const fn key(&self) -> &VerifyingKey<IC> {
        &self.key
    }

    pub fn verify<const N: usize>(
        &self,
        proof: &Proof,
        public_inputs: &[Scalar; N],
    ) -> Result<bool, VerifyError> {
        verify(&self.host, &self.key, proof, public_inputs)
    }

    /// Decode a calldata blob with `N` public inputs and verify it
    pub fn verify_calldata<const N: usize>(&self, calldata: &[u8]) -> Result<bool, VerifyError> {
        let (proof, inputs) = proof::decode::<N>(calldata)?;
        self.verify(&proof, &inputs)
    }
}
