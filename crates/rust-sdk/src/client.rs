//! Client for checking Groth16 proofs against the on-chain verifier

use crate::{
    error::{ClientError, Result},
    instructions,
    types::*,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use groth16_solana_core::decode_result;
use solana_client::rpc_client::RpcClient;
use solana_rpc_client_api::config::{RpcSendTransactionConfig, RpcSimulateTransactionConfig};
use solana_sdk::{
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Client for the Groth16 verifier program
///
/// # Example
///
/// ```ignore
/// use groth16_solana_sdk::{Groth16Client, VerifierConfig};
///
/// let client = Groth16Client::new(
///     Arc::new(RpcClient::new("http://localhost:8899")),
///     VerifierConfig::new(groth16_verifier::id()),
/// );
///
/// let outcome = client.simulate_verify(&payer.pubkey(), &calldata)?;
/// println!("valid: {}", outcome.valid);
/// ```
pub struct Groth16Client {
    client: Arc<RpcClient>,
    config: VerifierConfig,
}

impl Groth16Client {
    /// Create a new verifier client
    pub fn new(client: Arc<RpcClient>, config: VerifierConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Ask the verifier about `calldata` without landing a transaction.
    ///
    /// `fee_payer` only needs to exist; nothing is signed.
    pub fn simulate_verify(&self, fee_payer: &Pubkey, calldata: &[u8]) -> Result<VerifyOutcome> {
        let program_id = self.config.verifier_program_id;
        let ix = instructions::verify(&program_id, calldata);
        self.simulate(fee_payer, ix, &program_id)
    }

    /// Same as [`Self::simulate_verify`], relayed through the configured bridge
    pub fn simulate_verify_via_bridge(
        &self,
        fee_payer: &Pubkey,
        calldata: &[u8],
    ) -> Result<VerifyOutcome> {
        let bridge_id = self
            .config
            .bridge_program_id
            .ok_or(ClientError::BridgeNotConfigured)?;
        let ix =
            instructions::verify_via_bridge(&bridge_id, &self.config.verifier_program_id, calldata);
        self.simulate(fee_payer, ix, &bridge_id)
    }

    /// Land a verify transaction and wait for confirmation.
    ///
    /// A rejected proof still confirms; use simulation to read the answer.
    pub fn send_verify(&self, payer: &Keypair, calldata: &[u8]) -> Result<Signature> {
        let ix = instructions::verify(&self.config.verifier_program_id, calldata);
        self.send_and_confirm(payer, self.with_budget(ix))
    }

    fn with_budget(&self, ix: Instruction) -> Vec<Instruction> {
        vec![
            instructions::set_compute_unit_limit(self.config.compute_unit_limit),
            ix,
        ]
    }

    fn simulate(
        &self,
        fee_payer: &Pubkey,
        ix: Instruction,
        responder: &Pubkey,
    ) -> Result<VerifyOutcome> {
        let message = Message::new(&self.with_budget(ix), Some(fee_payer));
        let tx = Transaction::new_unsigned(message);

        let config = RpcSimulateTransactionConfig {
            sig_verify: false,
            replace_recent_blockhash: true,
            commitment: Some(self.config.commitment),
            ..Default::default()
        };
        let result = self.client.simulate_transaction_with_config(&tx, config)?.value;

        let logs = result.logs.unwrap_or_default();
        if let Some(err) = result.err {
            for line in &logs {
                log::debug!("{}", line);
            }
            return Err(ClientError::TransactionFailed(format!("{:?}", err)));
        }

        let return_data = result.return_data.ok_or(ClientError::MissingReturnData)?;
        let valid = parse_return_data(responder, &return_data.program_id, &return_data.data.0)?;
        log::info!(
            "Simulated verify: valid={} ({:?} CUs)",
            valid,
            result.units_consumed
        );

        Ok(VerifyOutcome {
            valid,
            units_consumed: result.units_consumed,
            logs,
        })
    }

    fn send_and_confirm(&self, payer: &Keypair, instructions: Vec<Instruction>) -> Result<Signature> {
        let recent_blockhash = self.client.get_latest_blockhash()?;

        let tx = Transaction::new_signed_with_payer(
            &instructions,
            Some(&payer.pubkey()),
            &[payer],
            recent_blockhash,
        );

        let config = RpcSendTransactionConfig {
            preflight_commitment: Some(self.config.commitment.commitment),
            ..Default::default()
        };
        let sig = self.client.send_transaction_with_config(&tx, config)?;

        // 30 attempts x 200ms
        for _ in 0..30 {
            thread::sleep(Duration::from_millis(200));
            match self.client.get_signature_status(&sig)? {
                Some(Ok(())) => return Ok(sig),
                Some(Err(e)) => return Err(ClientError::TransactionFailed(e.to_string())),
                None => continue,
            }
        }

        log::warn!("Gave up waiting for {}", sig);
        Err(ClientError::ConfirmationTimeout)
    }
}

/// Decode the base64 return data of a simulation into the verifier's answer
pub(crate) fn parse_return_data(expected: &Pubkey, program_id: &str, data: &str) -> Result<bool> {
    if program_id != expected.to_string() {
        return Err(ClientError::UnexpectedResponder {
            expected: expected.to_string(),
            actual: program_id.to_string(),
        });
    }
    let bytes = STANDARD.decode(data)?;
    Ok(decode_result(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use groth16_solana_core::{encode_result, ResultError};

    fn b64(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    #[test]
    fn test_parse_true_and_false() {
        let id = Pubkey::new_unique();
        let s = id.to_string();
        assert!(parse_return_data(&id, &s, &b64(&encode_result(true))).unwrap());
        assert!(!parse_return_data(&id, &s, &b64(&encode_result(false))).unwrap());
    }

    #[test]
    fn test_parse_rejects_other_responder() {
        let id = Pubkey::new_unique();
        let other = Pubkey::new_unique().to_string();
        let err = parse_return_data(&id, &other, &b64(&encode_result(true))).unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedResponder { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        let id = Pubkey::new_unique();
        let err = parse_return_data(&id, &id.to_string(), "not base64!").unwrap_err();
        assert!(matches!(err, ClientError::InvalidEncoding(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let id = Pubkey::new_unique();
        let err = parse_return_data(&id, &id.to_string(), &b64(&[1u8; 31])).unwrap_err();
        assert!(matches!(
            err,
            ClientError::MalformedResult(ResultError::InvalidLength { len: 31 })
        ));
    }

    #[test]
    fn test_parse_rejects_non_canonical_word() {
        let id = Pubkey::new_unique();
        let mut word = [0u8; 32];
        word[0] = 1;
        let err = parse_return_data(&id, &id.to_string(), &b64(&word)).unwrap_err();
        assert!(matches!(
            err,
            ClientError::MalformedResult(ResultError::NonCanonical)
        ));
    }

    #[test]
    fn test_bridge_requires_configuration() {
        let client = Groth16Client::new(
            Arc::new(RpcClient::new("http://127.0.0.1:1".to_string())),
            VerifierConfig::new(Pubkey::new_unique()),
        );
        let err = client
            .simulate_verify_via_bridge(&Pubkey::new_unique(), &[0u8; 288])
            .unwrap_err();
        assert!(matches!(err, ClientError::BridgeNotConfigured));
    }
}
