//! CPI helper for asking the Groth16 verifier program about a proof
//!
//! Forwards an opaque calldata payload to the verifier program with no
//! accounts attached, so the call cannot write anything, then reads the
//! 32-byte result word the verifier leaves as return data.
//!
//! # Example
//!
//! ```ignore
//! use groth16_verifier_cpi::verify;
//!
//! fn process(accounts: &[AccountInfo], calldata: &[u8]) -> ProgramResult {
//!     let verifier = &accounts[0];
//!
//!     if !verify(calldata, verifier)? {
//!         return Err(ProgramError::Custom(1)); // InvalidProof
//!     }
//!
//!     // Proof is valid! Continue with business logic...
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use groth16_solana_core::{decode_result, RESULT_SIZE};
use solana_program::{
    account_info::AccountInfo,
    instruction::Instruction,
    program::{get_return_data, invoke},
    program_error::ProgramError,
    pubkey::Pubkey,
};
use thiserror::Error;

/// Why a verifier answer could not be obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("Verifier call failed")]
    CallFailed,

    #[error("Verifier returned no data")]
    MissingResponse,

    #[error("Return data was not set by the verifier program")]
    ResponderMismatch,

    #[error("Verifier returned a malformed {len}-byte response")]
    MalformedResponse { len: usize },
}

impl BridgeError {
    /// Stable numeric code, surfaced as `ProgramError::Custom`
    pub const fn code(&self) -> u32 {
        match self {
            BridgeError::CallFailed => 0x200,
            BridgeError::MissingResponse => 0x201,
            BridgeError::ResponderMismatch => 0x202,
            BridgeError::MalformedResponse { .. } => 0x203,
        }
    }
}

impl From<BridgeError> for ProgramError {
    fn from(e: BridgeError) -> Self {
        ProgramError::Custom(e.code())
    }
}

/// One read-only call into a verifier, yielding whatever return data is
/// present afterwards and the program that set it.
pub trait VerifierCall {
    fn call(&self, payload: &[u8]) -> Result<Option<(Pubkey, Vec<u8>)>, ProgramError>;
}

/// Cross-program invocation of a deployed verifier
pub struct Cpi<'a, 'info> {
    verifier: &'a AccountInfo<'info>,
}

impl<'a, 'info> Cpi<'a, 'info> {
    pub fn new(verifier: &'a AccountInfo<'info>) -> Self {
        Self { verifier }
    }
}

impl VerifierCall for Cpi<'_, '_> {
    fn call(&self, payload: &[u8]) -> Result<Option<(Pubkey, Vec<u8>)>, ProgramError> {
        let ix = Instruction {
            program_id: *self.verifier.key,
            accounts: Vec::new(),
            data: payload.to_vec(),
        };
        invoke(&ix, core::slice::from_ref(self.verifier))?;
        Ok(get_return_data())
    }
}

/// Ask the verifier program behind `verifier` whether `payload` holds a
/// valid proof. The payload is forwarded unmodified.
pub fn verify(payload: &[u8], verifier: &AccountInfo) -> Result<bool, BridgeError> {
    verify_with(&Cpi::new(verifier), payload, verifier.key)
}

/// [`verify`] over any [`VerifierCall`]
pub fn verify_with<C: VerifierCall + ?Sized>(
    caller: &C,
    payload: &[u8],
    verifier_id: &Pubkey,
) -> Result<bool, BridgeError> {
    let (responder, data) = caller
        .call(payload)
        .map_err(|_| BridgeError::CallFailed)?
        .ok_or(BridgeError::MissingResponse)?;

    // A CPI clears return data to (callee, []); nothing set means no answer
    if data.is_empty() {
        return Err(BridgeError::MissingResponse);
    }
    if responder != *verifier_id {
        return Err(BridgeError::ResponderMismatch);
    }
    if data.len() != RESULT_SIZE {
        return Err(BridgeError::MalformedResponse { len: data.len() });
    }
    decode_result(&data).map_err(|_| BridgeError::MalformedResponse { len: data.len() })
}
