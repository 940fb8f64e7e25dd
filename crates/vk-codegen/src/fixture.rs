//! Deterministic development circuit: `a * b = c`
//!
//! `c` is the only public input, `a` and `b` are private. The setup runs
//! from a fixed seed so every build produces the same key; the verifier
//! program embeds it when no production key is configured.
//!
//! The toxic waste for this key is derivable from [`DEV_SEED`]. Never
//! deploy it.

use crate::error::Result;
use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, Proof, ProvingKey, VerifyingKey};
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError},
};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};

/// Seed for the development trusted setup ("groth16!")
pub const DEV_SEED: u64 = 0x6772_6f74_6831_3621;

/// Seed for proof randomness, so fixture proofs are reproducible too
const PROOF_SEED: u64 = DEV_SEED ^ 0xffff;

/// Proves knowledge of `a`, `b` with `a * b = c` for public `c`
#[derive(Clone, Copy, Debug, Default)]
pub struct MulCircuit {
    pub a: Option<Fr>,
    pub b: Option<Fr>,
    pub c: Option<Fr>,
}

impl MulCircuit {
    /// Shape-only instance for key generation
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(a: Fr, b: Fr) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
            c: Some(a * b),
        }
    }
}

impl ConstraintSynthesizer<Fr> for MulCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> std::result::Result<(), SynthesisError> {
        let c = cs.new_input_variable(|| self.c.ok_or(SynthesisError::AssignmentMissing))?;
        let a = cs.new_witness_variable(|| self.a.ok_or(SynthesisError::AssignmentMissing))?;
        let b = cs.new_witness_variable(|| self.b.ok_or(SynthesisError::AssignmentMissing))?;

        cs.enforce_constraint(lc!() + a, lc!() + b, lc!() + c)?;
        Ok(())
    }
}

/// Run the fixed-seed setup for [`MulCircuit`]
pub fn dev_setup() -> Result<(ProvingKey<Bn254>, VerifyingKey<Bn254>)> {
    let mut rng = StdRng::seed_from_u64(DEV_SEED);
    let (pk, vk) = Groth16::<Bn254>::circuit_specific_setup(MulCircuit::empty(), &mut rng)?;
    Ok((pk, vk))
}

/// Prove `a * b = c`, returning the proof and the public input `c`
pub fn prove(pk: &ProvingKey<Bn254>, a: u64, b: u64) -> Result<(Proof<Bn254>, Fr)> {
    let c = Fr::from(a) * Fr::from(b);
    let circuit = MulCircuit::new(Fr::from(a), Fr::from(b));
    let mut rng = StdRng::seed_from_u64(PROOF_SEED);
    let proof = Groth16::<Bn254>::prove(pk, circuit, &mut rng)?;
    Ok((proof, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_is_deterministic() {
        let (_, vk1) = dev_setup().unwrap();
        let (_, vk2) = dev_setup().unwrap();
        assert_eq!(vk1, vk2);
        assert_eq!(vk1.gamma_abc_g1.len(), 2);
    }

    #[test]
    fn test_proof_verifies_with_arkworks() {
        let (pk, vk) = dev_setup().unwrap();
        let (proof, c) = prove(&pk, 3, 4).unwrap();
        assert_eq!(c, Fr::from(12u64));

        assert!(Groth16::<Bn254>::verify(&vk, &[c], &proof).unwrap());
        assert!(!Groth16::<Bn254>::verify(&vk, &[Fr::from(13u64)], &proof).unwrap());
    }

    #[test]
    fn test_proofs_are_reproducible() {
        let (pk, _) = dev_setup().unwrap();
        let (p1, _) = prove(&pk, 3, 4).unwrap();
        let (p2, _) = prove(&pk, 3, 4).unwrap();
        assert_eq!(p1, p2);
    }
}
