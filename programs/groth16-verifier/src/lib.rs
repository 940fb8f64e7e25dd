//! Groth16 Verifier for Solana
//!
//! Verifies Groth16 proofs on the BN254 curve through Solana's alt_bn128
//! syscalls, against one verifying key embedded at build time.
//!
//! ## Instruction
//!
//! The whole instruction data is the calldata blob, with no selector:
//!
//! ```text
//! A (64) || B (128) || C (64) || input_0 (32) || … || input_{k-1} (32)
//! ```
//!
//! No accounts are read or written.
//!
//! ## Result
//!
//! A completed check sets the program's return data to a 32-byte word
//! (`0…01` valid, `0…00` rejected) and succeeds. Calldata that cannot be
//! checked fails the instruction with `ProgramError::Custom(code)`:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0x100 | Malformed calldata (length, or input ≥ r) |
//! | 0x101 | Input count does not match the key |
//! | 0x102 | alt_bn128 syscall failed (e.g. point not on curve) |
//!
//! ## Verifying key
//!
//! Selected by `GROTH16_VK` at build time (see build.rs). Without it the
//! development key for the `a*b=c` circuit is embedded.

use groth16_solana_core::{encode_result, AltBn128, Bn254Host, Verifier};
use solana_program::{
    account_info::AccountInfo, declare_id, entrypoint::ProgramResult, log::sol_log_compute_units,
    msg, program::set_return_data, program_error::ProgramError, pubkey::Pubkey,
};

declare_id!("Groth16111111111111111111111111111111111111");

mod verifying_key {
    include!(concat!(env!("OUT_DIR"), "/verifying_key.rs"));
}

pub use verifying_key::{GAMMA_ABC_LEN, NR_PUBLIC_INPUTS, VERIFYING_KEY};

/// The embedded key bound to the alt_bn128 syscalls
pub static VERIFIER: Verifier<AltBn128, GAMMA_ABC_LEN> = Verifier::new(VERIFYING_KEY, AltBn128);

/// Calldata length accepted by this build
pub const CALLDATA_SIZE: usize = groth16_solana_core::calldata_size(NR_PUBLIC_INPUTS);

#[cfg(not(feature = "no-entrypoint"))]
solana_program::entrypoint!(process_instruction);

pub fn process_instruction(
    _program_id: &Pubkey,
    _accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    process_verify(&VERIFIER, instruction_data)
}

/// Verify `calldata` against `verifier` and publish the result word.
///
/// The calldata must carry [`NR_PUBLIC_INPUTS`] inputs; a verifier whose
/// key expects a different count fails with the arity code.
pub fn process_verify<H: Bn254Host, const IC: usize>(
    verifier: &Verifier<H, IC>,
    calldata: &[u8],
) -> ProgramResult {
    msg!("Groth16 Verifier: {} bytes of calldata", calldata.len());
    sol_log_compute_units();

    let valid = verifier
        .verify_calldata::<NR_PUBLIC_INPUTS>(calldata)
        .map_err(|e| {
            msg!("Verification error: {}", e);
            ProgramError::Custom(e.code())
        })?;

    sol_log_compute_units();
    if valid {
        msg!("Proof verified");
    } else {
        msg!("Proof rejected");
    }

    set_return_data(&encode_result(valid));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use groth16_solana_core::VerifyingKey;
    use groth16_solana_vk_codegen::{convert, fixture};

    #[test]
    fn test_embedded_key_shape() {
        assert_eq!(GAMMA_ABC_LEN, NR_PUBLIC_INPUTS + 1);
        assert_eq!(VERIFIER.key().num_public_inputs(), NR_PUBLIC_INPUTS);
        assert_eq!(CALLDATA_SIZE, 256 + 32 * NR_PUBLIC_INPUTS);
    }

    #[test]
    fn test_development_key_embedded_by_default() {
        if option_env!("GROTH16_VK").is_some() {
            return;
        }
        let (_, vk) = fixture::dev_setup().unwrap();
        let expected = VerifyingKey::<GAMMA_ABC_LEN>::from_bytes(&convert::vk_to_bytes(&vk)).unwrap();
        assert_eq!(VERIFIER.key(), &expected);
    }
}
