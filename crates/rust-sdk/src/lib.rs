//! Rust SDK for checking Groth16 proofs on Solana
//!
//! Builds calldata from arkworks proofs and asks the deployed verifier
//! program (directly or through the bridge) whether a proof is valid by
//! simulating the verify transaction and decoding its return data.
//!
//! # Example
//!
//! ```ignore
//! use groth16_solana_sdk::{calldata, Groth16Client, VerifierConfig};
//! use solana_client::rpc_client::RpcClient;
//! use std::sync::Arc;
//!
//! let client = Groth16Client::new(
//!     Arc::new(RpcClient::new("http://localhost:8899".to_string())),
//!     VerifierConfig::new(verifier_id),
//! );
//!
//! let data = calldata::calldata(&proof, &[public_input]);
//! let outcome = client.simulate_verify(&payer.pubkey(), &data)?;
//! println!("Verified: {}", outcome.valid);
//! ```

mod client;
mod error;
pub mod instructions;
mod types;

/// Calldata construction from arkworks values
pub mod calldata {
    pub use groth16_solana_core::calldata_size;
    pub use groth16_solana_vk_codegen::convert::{calldata, fr_to_bytes, proof_to_bytes};
}

pub use client::Groth16Client;
pub use error::{ClientError, Result};
pub use types::*;
