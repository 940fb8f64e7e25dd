//! Configuration and result types for the Groth16 Solana SDK

use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

/// Compute units requested for a verify transaction.
///
/// A one-input check spends most of its budget in the four-pair
/// alt_bn128 pairing; each extra public input adds a G1 mul and add.
pub const DEFAULT_COMPUTE_UNIT_LIMIT: u32 = 200_000;

/// Configuration for the Groth16 verifier client
#[derive(Clone, Debug)]
pub struct VerifierConfig {
    /// The deployed verifier program ID
    pub verifier_program_id: Pubkey,
    /// Optional bridge program relaying calls to the verifier
    pub bridge_program_id: Option<Pubkey>,
    /// Compute unit limit per transaction (default: 200,000)
    pub compute_unit_limit: u32,
    /// Commitment used for simulation and confirmation
    pub commitment: CommitmentConfig,
}

impl VerifierConfig {
    /// Create a new config with default values
    pub fn new(verifier_program_id: Pubkey) -> Self {
        Self {
            verifier_program_id,
            bridge_program_id: None,
            compute_unit_limit: DEFAULT_COMPUTE_UNIT_LIMIT,
            commitment: CommitmentConfig::confirmed(),
        }
    }

    /// Route verification through a bridge program
    pub fn with_bridge(mut self, bridge_program_id: Pubkey) -> Self {
        self.bridge_program_id = Some(bridge_program_id);
        self
    }

    /// Set custom compute unit limit
    pub fn with_compute_unit_limit(mut self, limit: u32) -> Self {
        self.compute_unit_limit = limit;
        self
    }

    /// Set custom commitment
    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }
}

/// Outcome of a simulated verify transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    /// Whether the verifier accepted the proof
    pub valid: bool,
    /// Compute units reported by the simulation, if any
    pub units_consumed: Option<u64>,
    /// Program logs from the simulation
    pub logs: Vec<String>,
}
