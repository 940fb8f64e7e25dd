//! Core types for Groth16 verification
//!
//! Uses raw byte arrays matching Solana BN254 syscall format.

use crate::constants::{FIELD_SIZE, G1_SIZE, G2_SIZE};
use hex_literal::hex;

/// A 32-byte scalar field element (Fr for BN254).
/// Stored in big-endian format.
pub type Scalar = [u8; FIELD_SIZE];

/// A 64-byte G1 point (uncompressed, big-endian x || y).
pub type G1 = [u8; G1_SIZE];

/// A 128-byte G2 point (uncompressed, big-endian x_im || x_re || y_im || y_re).
pub type G2 = [u8; G2_SIZE];

/// Scalar representing zero
pub const SCALAR_ZERO: Scalar = [0u8; 32];

/// Scalar representing one
pub const SCALAR_ONE: Scalar = {
    let mut s = [0u8; 32];
    s[31] = 1;
    s
};

/// G1 identity point (point at infinity)
/// For BN254, the identity is represented as (0, 0)
pub const G1_IDENTITY: G1 = [0u8; 64];

/// G2 identity point, all four coordinates zero
pub const G2_IDENTITY: G2 = [0u8; 128];

/// BN254 G1 generator point
/// x = 1, y = 2
pub const G1_GENERATOR: G1 = {
    let mut g = [0u8; 64];
    g[31] = 1; // x = 1
    g[63] = 2; // y = 2
    g
};

/// BN254 scalar field modulus (r)
/// r = 21888242871839275222246405745257275088548364400416034343698204186575808495617
pub const FR_MODULUS: Scalar =
    hex!("30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001");

/// BN254 base field modulus (q)
/// q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const FQ_MODULUS: Scalar =
    hex!("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");

/// Build a scalar from a small integer
pub const fn scalar_from_u64(value: u64) -> Scalar {
    let bytes = value.to_be_bytes();
    let mut s = [0u8; 32];
    let mut i = 0;
    while i < 8 {
        s[24 + i] = bytes[i];
        i += 1;
    }
    s
}
