//! Instruction builders for the verifier and bridge programs

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

/// Compute budget program ID
pub const COMPUTE_BUDGET_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("ComputeBudget111111111111111111111111111111");

/// SetComputeUnitLimit discriminator in the compute budget program
const IX_SET_COMPUTE_UNIT_LIMIT: u8 = 2;

/// Create a verify instruction. The calldata is the whole instruction data.
pub fn verify(program_id: &Pubkey, calldata: &[u8]) -> Instruction {
    Instruction::new_with_bytes(*program_id, calldata, vec![])
}

/// Create a bridge instruction that forwards `calldata` to `verifier_id`
pub fn verify_via_bridge(bridge_id: &Pubkey, verifier_id: &Pubkey, calldata: &[u8]) -> Instruction {
    Instruction::new_with_bytes(
        *bridge_id,
        calldata,
        vec![AccountMeta::new_readonly(*verifier_id, false)],
    )
}

/// Build a SetComputeUnitLimit instruction
pub fn set_compute_unit_limit(units: u32) -> Instruction {
    let mut data = Vec::with_capacity(5);
    data.push(IX_SET_COMPUTE_UNIT_LIMIT);
    data.extend_from_slice(&units.to_le_bytes());
    Instruction::new_with_bytes(COMPUTE_BUDGET_PROGRAM_ID, &data, vec![])
}
