//! Integration tests for the verifier bridge
//!
//! Runs the bridge against the real verifier (bound to the development key)
//! and against responders that answer with malformed or missing data.

use groth16_solana_core::{encode_result, AltBn128, Verifier, VerifyingKey};
use groth16_solana_vk_codegen::{convert, fixture};
use groth16_verifier::process_verify;
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program::set_return_data,
};
use solana_program_test::*;
use solana_sdk::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::Signer,
    transaction::{Transaction, TransactionError},
};
use std::sync::OnceLock;

struct Dev {
    verifier: Verifier<AltBn128, 2>,
    /// Proof of 3 * 4 = 12
    calldata: Vec<u8>,
}

fn dev() -> &'static Dev {
    static DEV: OnceLock<Dev> = OnceLock::new();
    DEV.get_or_init(|| {
        let (pk, vk) = fixture::dev_setup().unwrap();
        let key = VerifyingKey::<2>::from_bytes(&convert::vk_to_bytes(&vk)).unwrap();
        let (proof, c) = fixture::prove(&pk, 3, 4).unwrap();
        Dev {
            verifier: Verifier::new(key, AltBn128),
            calldata: convert::calldata(&proof, &[c]),
        }
    })
}

fn verifier_with_dev_key(
    _program_id: &Pubkey,
    _accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    process_verify(&dev().verifier, instruction_data)
}

fn short_responder(_: &Pubkey, _: &[AccountInfo], _: &[u8]) -> ProgramResult {
    set_return_data(&[0u8; 31]);
    Ok(())
}

fn long_responder(_: &Pubkey, _: &[AccountInfo], _: &[u8]) -> ProgramResult {
    let mut data = [0u8; 33];
    data[32] = 1;
    set_return_data(&data);
    Ok(())
}

fn non_canonical_responder(_: &Pubkey, _: &[AccountInfo], _: &[u8]) -> ProgramResult {
    let mut word = [0u8; 32];
    word[0] = 1;
    set_return_data(&word);
    Ok(())
}

fn silent_responder(_: &Pubkey, _: &[AccountInfo], _: &[u8]) -> ProgramResult {
    Ok(())
}

/// Bridge plus the real verifier
fn program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new(
        "verifier_bridge",
        verifier_bridge::id(),
        processor!(verifier_bridge::process_instruction),
    );
    program_test.add_program(
        "groth16_verifier",
        groth16_verifier::id(),
        processor!(verifier_with_dev_key),
    );
    program_test
}

#[derive(Debug, PartialEq)]
enum Outcome {
    Returned(Vec<u8>),
    Failed(u32),
}

async fn bridge(program_test: ProgramTest, verifier: Pubkey, data: Vec<u8>) -> Outcome {
    let (banks_client, payer, recent_blockhash) = program_test.start().await;

    let ix = Instruction {
        program_id: verifier_bridge::id(),
        accounts: vec![AccountMeta::new_readonly(verifier, false)],
        data,
    };
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );

    let sim = banks_client.simulate_transaction(tx).await.unwrap();
    match sim.result.unwrap() {
        Ok(()) => {
            let return_data = sim
                .simulation_details
                .and_then(|details| details.return_data)
                .expect("bridge must set return data");
            assert_eq!(return_data.program_id, verifier_bridge::id());
            Outcome::Returned(return_data.data)
        }
        Err(TransactionError::InstructionError(0, InstructionError::Custom(code))) => {
            Outcome::Failed(code)
        }
        Err(e) => panic!("unexpected transaction error: {:?}", e),
    }
}

/// Point the bridge at a responder registered under a fresh program id
macro_rules! bridge_to_responder {
    ($name:literal, $responder:ident) => {{
        let responder_id = Pubkey::new_unique();
        let mut program_test = program_test();
        program_test.add_program($name, responder_id, processor!($responder));
        bridge(program_test, responder_id, dev().calldata.clone()).await
    }};
}

#[tokio::test]
async fn test_bridge_relays_valid_proof() {
    let outcome = bridge(program_test(), groth16_verifier::id(), dev().calldata.clone()).await;
    assert_eq!(outcome, Outcome::Returned(encode_result(true).to_vec()));
}

#[tokio::test]
async fn test_bridge_relays_rejection() {
    let mut data = dev().calldata.clone();
    data[287] = 13;
    let outcome = bridge(program_test(), groth16_verifier::id(), data).await;
    assert_eq!(outcome, Outcome::Returned(encode_result(false).to_vec()));
}

#[tokio::test]
async fn test_bridge_propagates_verifier_failure() {
    let outcome = bridge(program_test(), groth16_verifier::id(), vec![0u8; 100]).await;
    // The runtime aborts with the verifier's own code; the native test
    // harness hands the failure back to the bridge instead.
    assert!(
        matches!(outcome, Outcome::Failed(0x100) | Outcome::Failed(0x200)),
        "{:?}",
        outcome
    );
}

#[tokio::test]
async fn test_short_response_is_malformed() {
    let outcome = bridge_to_responder!("short_responder", short_responder);
    assert_eq!(outcome, Outcome::Failed(0x203));
}

#[tokio::test]
async fn test_long_response_is_malformed() {
    let outcome = bridge_to_responder!("long_responder", long_responder);
    assert_eq!(outcome, Outcome::Failed(0x203));
}

#[tokio::test]
async fn test_non_canonical_response_is_malformed() {
    let outcome = bridge_to_responder!("non_canonical_responder", non_canonical_responder);
    assert_eq!(outcome, Outcome::Failed(0x203));
}

#[tokio::test]
async fn test_missing_response() {
    let outcome = bridge_to_responder!("silent_responder", silent_responder);
    assert_eq!(outcome, Outcome::Failed(0x201));
}

#[tokio::test]
async fn test_missing_verifier_account() {
    let (banks_client, payer, recent_blockhash) = program_test().start().await;
    let tx = Transaction::new_signed_with_payer(
        &[Instruction {
            program_id: verifier_bridge::id(),
            accounts: vec![],
            data: dev().calldata.clone(),
        }],
        Some(&payer.pubkey()),
        &[&payer],
        recent_blockhash,
    );

    let err = banks_client.process_transaction(tx).await.unwrap_err().unwrap();
    assert_eq!(
        err,
        TransactionError::InstructionError(0, InstructionError::NotEnoughAccountKeys)
    );
}
