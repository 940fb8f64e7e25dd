//! Groth16 verifier for BN254 proofs on Solana
//!
//! Verification runs entirely over the `alt_bn128` syscalls (G1 addition,
//! G1 scalar multiplication and the multi-pairing check). Every buffer on
//! the decode → accumulate → pairing path is a fixed-size array sized by
//! const generics, so a call never touches the heap itself.
//!
//! ## Byte layouts
//!
//! - Scalar / field word: 32 bytes, big-endian
//! - G1: `x || y` (64 bytes), identity is all zeros
//! - G2: `x_im || x_re || y_im || y_re` (128 bytes), the EIP-197 order
//!   expected by the syscalls
//! - Calldata: `A || B || C || input_0 || … || input_{k-1}`
//!
//! # Example
//!
//! ```ignore
//! use groth16_solana_core::{AltBn128, Verifier};
//!
//! static VERIFIER: Verifier<AltBn128, 2> = Verifier::new(VERIFYING_KEY, AltBn128);
//!
//! let valid = VERIFIER.verify_calldata::<1>(instruction_data)?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod constants;
pub mod debug;
pub mod errors;
pub mod field;
pub mod key;
pub mod ops;
pub mod proof;
pub mod result;
pub mod types;
pub mod verifier;

pub use constants::*;
pub use errors::{Bn254Error, CalldataError, KeyError, Primitive, VerifyError};
pub use key::VerifyingKey;
pub use ops::{AltBn128, Bn254Host};
pub use proof::{calldata_size, decode, encode_into, Proof};
pub use result::{decode_result, encode_result, ResultError};
pub use types::{Scalar, FQ_MODULUS, FR_MODULUS, G1, G1_GENERATOR, G1_IDENTITY, G2, G2_IDENTITY};
pub use verifier::{verify, Verifier};
