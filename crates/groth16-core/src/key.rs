//! Verifying key for a single Groth16 circuit
//!
//! ## Wire format (448 + 64·IC bytes):
//! - [0..64]: alpha (G1)
//! - [64..192]: beta (G2)
//! - [192..320]: gamma (G2)
//! - [320..448]: delta (G2)
//! - [448..]: gamma_abc[0..IC] (G1 each)
//!
//! `IC` is the number of public inputs plus one and is fixed at compile
//! time, so the key is a plain value with no heap storage. Verifier
//! programs embed it as a `const`; it is never mutated after construction.

use crate::constants::{G1_SIZE, G2_SIZE, VK_HEADER_SIZE};
use crate::errors::KeyError;
use crate::types::{G1, G2};

/// Parsed Groth16 verifying key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyingKey<const IC: usize> {
    /// α in G1
    pub alpha_g1: G1,
    /// β in G2
    pub beta_g2: G2,
    /// γ in G2
    pub gamma_g2: G2,
    /// δ in G2
    pub delta_g2: G2,
    /// Input commitments: gamma_abc[0] plus one point per public input
    pub gamma_abc_g1: [G1; IC],
}

impl<const IC: usize> VerifyingKey<IC> {
    /// Build a key from trusted-setup constants
    pub const fn new(
        alpha_g1: G1,
        beta_g2: G2,
        gamma_g2: G2,
        delta_g2: G2,
        gamma_abc_g1: [G1; IC],
    ) -> Self {
        Self {
            alpha_g1,
            beta_g2,
            gamma_g2,
            delta_g2,
            gamma_abc_g1,
        }
    }

    /// Size of this key in the wire format
    pub const fn wire_size() -> usize {
        VK_HEADER_SIZE + IC * G1_SIZE
    }

    /// Number of public inputs this key verifies
    pub const fn num_public_inputs(&self) -> usize {
        IC.saturating_sub(1)
    }

    /// Parse a key from the wire format
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != Self::wire_size() {
            return Err(KeyError::InvalidSize {
                expected: Self::wire_size(),
                actual: bytes.len(),
            });
        }

        let mut alpha_g1 = [0u8; G1_SIZE];
        let mut beta_g2 = [0u8; G2_SIZE];
        let mut gamma_g2 = [0u8; G2_SIZE];
        let mut delta_g2 = [0u8; G2_SIZE];

        let (alpha, rest) = bytes.split_at(G1_SIZE);
        let (beta, rest) = rest.split_at(G2_SIZE);
        let (gamma, rest) = rest.split_at(G2_SIZE);
        let (delta, ic_bytes) = rest.split_at(G2_SIZE);

        alpha_g1.copy_from_slice(alpha);
        beta_g2.copy_from_slice(beta);
        gamma_g2.copy_from_slice(gamma);
        delta_g2.copy_from_slice(delta);

        let mut gamma_abc_g1 = [[0u8; G1_SIZE]; IC];
        for (point, chunk) in gamma_abc_g1.iter_mut().zip(ic_bytes.chunks_exact(G1_SIZE)) {
            point.copy_from_slice(chunk);
        }

        Ok(Self::new(alpha_g1, beta_g2, gamma_g2, delta_g2, gamma_abc_g1))
    }

    /// Serialize into the wire format. `out` must be exactly `wire_size()` bytes.
    pub fn write_to(&self, out: &mut [u8]) -> Result<(), KeyError> {
        if out.len() != Self::wire_size() {
            return Err(KeyError::InvalidSize {
                expected: Self::wire_size(),
                actual: out.len(),
            });
        }

        let (alpha, rest) = out.split_at_mut(G1_SIZE);
        let (beta, rest) = rest.split_at_mut(G2_SIZE);
        let (gamma, rest) = rest.split_at_mut(G2_SIZE);
        let (delta, ic_bytes) = rest.split_at_mut(G2_SIZE);

        alpha.copy_from_slice(&self.alpha_g1);
        beta.copy_from_slice(&self.beta_g2);
        gamma.copy_from_slice(&self.gamma_g2);
        delta.copy_from_slice(&self.delta_g2);
        for (chunk, point) in ic_bytes.chunks_exact_mut(G1_SIZE).zip(&self.gamma_abc_g1) {
            chunk.copy_from_slice(point);
        }

        Ok(())
    }
}
