//! Arkworks types → alt_bn128 byte layout
//!
//! Field elements become 32-byte big-endian words. G2 coordinates are
//! written imaginary part first (`c1 || c0`), which is the order the
//! syscalls expect and the reverse of arkworks' internal `Fq2 { c0, c1 }`.
//! The point at infinity is all zeros in both groups.

use crate::error::{CodegenError, Result};
use ark_bn254::{Bn254, Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};
use ark_groth16::{Proof, VerifyingKey};
use ark_serialize::CanonicalDeserialize;

/// Bytes of a G1 point in the wire format
pub const G1_BYTES: usize = 64;
/// Bytes of a G2 point in the wire format
pub const G2_BYTES: usize = 128;
/// Bytes of a proof (A, B, C) in the wire format
pub const PROOF_BYTES: usize = 256;
/// Bytes of a key before its input commitments
pub const VK_HEADER_BYTES: usize = G1_BYTES + 3 * G2_BYTES;

/// Any prime field element as a 32-byte big-endian word
pub fn field_to_bytes<F: PrimeField>(f: &F) -> [u8; 32] {
    let be = f.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    let start = 32usize.saturating_sub(be.len());
    out[start..].copy_from_slice(&be[be.len() - (32 - start)..]);
    out
}

/// Scalar as a public input word
pub fn fr_to_bytes(fr: &Fr) -> [u8; 32] {
    field_to_bytes(fr)
}

/// Parse a public input word, reducing modulo r
pub fn fr_from_bytes(bytes: &[u8; 32]) -> Fr {
    Fr::from_be_bytes_mod_order(bytes)
}

pub fn g1_to_bytes(p: &G1Affine) -> [u8; G1_BYTES] {
    let mut out = [0u8; G1_BYTES];
    if p.is_zero() {
        return out;
    }
    out[..32].copy_from_slice(&field_to_bytes(&p.x));
    out[32..].copy_from_slice(&field_to_bytes(&p.y));
    out
}

pub fn g2_to_bytes(p: &G2Affine) -> [u8; G2_BYTES] {
    let mut out = [0u8; G2_BYTES];
    if p.is_zero() {
        return out;
    }
    out[0..32].copy_from_slice(&field_to_bytes(&p.x.c1));
    out[32..64].copy_from_slice(&field_to_bytes(&p.x.c0));
    out[64..96].copy_from_slice(&field_to_bytes(&p.y.c1));
    out[96..128].copy_from_slice(&field_to_bytes(&p.y.c0));
    out
}

/// `A || B || C`
pub fn proof_to_bytes(proof: &Proof<Bn254>) -> [u8; PROOF_BYTES] {
    let mut out = [0u8; PROOF_BYTES];
    out[0..64].copy_from_slice(&g1_to_bytes(&proof.a));
    out[64..192].copy_from_slice(&g2_to_bytes(&proof.b));
    out[192..256].copy_from_slice(&g1_to_bytes(&proof.c));
    out
}

/// Full verifier calldata: the proof followed by one word per public input
pub fn calldata(proof: &Proof<Bn254>, public_inputs: &[Fr]) -> Vec<u8> {
    let mut out = Vec::with_capacity(PROOF_BYTES + 32 * public_inputs.len());
    out.extend_from_slice(&proof_to_bytes(proof));
    for input in public_inputs {
        out.extend_from_slice(&fr_to_bytes(input));
    }
    out
}

/// Verifying key in the wire format: `alpha || beta || gamma || delta || gamma_abc[..]`
pub fn vk_to_bytes(vk: &VerifyingKey<Bn254>) -> Vec<u8> {
    let mut out = Vec::with_capacity(VK_HEADER_BYTES + G1_BYTES * vk.gamma_abc_g1.len());
    out.extend_from_slice(&g1_to_bytes(&vk.alpha_g1));
    out.extend_from_slice(&g2_to_bytes(&vk.beta_g2));
    out.extend_from_slice(&g2_to_bytes(&vk.gamma_g2));
    out.extend_from_slice(&g2_to_bytes(&vk.delta_g2));
    for point in &vk.gamma_abc_g1 {
        out.extend_from_slice(&g1_to_bytes(point));
    }
    out
}

/// Load an arkworks verifying key (uncompressed, as written by
/// `serialize_uncompressed`, or compressed). Points are validated.
pub fn load_vk(bytes: &[u8]) -> Result<VerifyingKey<Bn254>> {
    match VerifyingKey::<Bn254>::deserialize_uncompressed(bytes) {
        Ok(vk) => Ok(vk),
        Err(_) => Ok(VerifyingKey::<Bn254>::deserialize_compressed(bytes)?),
    }
}

/// Load an arkworks proof, compressed (128 bytes) or uncompressed (256 bytes)
pub fn load_proof(bytes: &[u8]) -> Result<Proof<Bn254>> {
    match bytes.len() {
        128 => Ok(Proof::<Bn254>::deserialize_compressed(bytes)?),
        256 => Ok(Proof::<Bn254>::deserialize_uncompressed(bytes)?),
        actual => Err(CodegenError::InvalidProofLength { actual }),
    }
}

/// Load one arkworks-serialized scalar (32 bytes, little-endian)
pub fn load_fr(bytes: &[u8]) -> Result<Fr> {
    Ok(Fr::deserialize_uncompressed(bytes)?)
}

/// Build verifier calldata from an arkworks proof file and one scalar file
/// per public input, in input order
pub fn load_calldata<I: AsRef<[u8]>>(proof: &[u8], inputs: &[I]) -> Result<Vec<u8>> {
    let proof = load_proof(proof)?;
    let inputs = inputs
        .iter()
        .map(|bytes| load_fr(bytes.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(calldata(&proof, &inputs))
}
