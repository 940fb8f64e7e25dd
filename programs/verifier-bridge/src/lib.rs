//! Verifier Bridge Program
//!
//! Lets a caller that cannot reach the verifier directly ask it about a
//! proof. The bridge forwards the calldata unmodified over a read-only CPI
//! and republishes the verifier's 32-byte answer as its own return data.
//!
//! ## Instruction
//!
//! Accounts:
//! 0. `[]` Verifier program
//!
//! Data: the verifier calldata, passed through as-is.
//!
//! ## Failures
//!
//! A missing, foreign or malformed answer fails the instruction with the
//! bridge error code (0x200..=0x203). It is never reported as `false`.

use groth16_solana_core::encode_result;
use groth16_verifier_cpi::verify;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    declare_id,
    entrypoint::ProgramResult,
    msg,
    program::set_return_data,
    program_error::ProgramError,
    pubkey::Pubkey,
};

declare_id!("Bridge1111111111111111111111111111111111111");

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

pub fn process_instruction(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let account_iter = &mut accounts.iter();
    let verifier = next_account_info(account_iter)?;

    msg!("Forwarding {} bytes to verifier {}", instruction_data.len(), verifier.key);

    let valid = verify(instruction_data, verifier).map_err(|e| {
        msg!("Bridge error: {}", e);
        ProgramError::from(e)
    })?;

    msg!("Verifier answered {}", valid);
    set_return_data(&encode_result(valid));
    Ok(())
}
