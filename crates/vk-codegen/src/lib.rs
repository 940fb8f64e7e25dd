//! Arkworks → alt_bn128 wire conversion for Groth16 (BN254)
//!
//! Used in three places:
//! - the verifier program's build script, to embed a verifying key as a
//!   `const` ([`render::render_rust`])
//! - the off-chain SDK, to build calldata from arkworks proofs
//!   ([`convert::calldata`])
//! - tests, which need a deterministic key and real proofs ([`fixture`])

pub mod convert;
pub mod error;
pub mod fixture;
pub mod render;

pub use error::{CodegenError, Result};
