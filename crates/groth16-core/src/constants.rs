//! Sizes of the fixed byte layouts used by the verifier

/// Size of a BN254 field word (Fq or Fr) in bytes
pub const FIELD_SIZE: usize = 32;

/// Size of an uncompressed G1 point (x || y)
pub const G1_SIZE: usize = 2 * FIELD_SIZE;

/// Size of an uncompressed G2 point (x_im || x_re || y_im || y_re)
pub const G2_SIZE: usize = 4 * FIELD_SIZE;

/// Groth16 proof size: A (G1) + B (G2) + C (G1) = 256 bytes
pub const PROOF_SIZE: usize = G1_SIZE + G2_SIZE + G1_SIZE;

/// alt_bn128 G1 addition input: two G1 points
pub const G1_ADD_INPUT_SIZE: usize = 2 * G1_SIZE;

/// alt_bn128 G1 multiplication input: G1 point + scalar
pub const G1_MUL_INPUT_SIZE: usize = G1_SIZE + FIELD_SIZE;

/// One (G1, G2) pair in the pairing input
pub const PAIRING_ELEMENT_SIZE: usize = G1_SIZE + G2_SIZE;

/// The Groth16 equation is checked as a product of exactly four pairings
pub const GROTH16_PAIRS: usize = 4;

/// Full pairing input for a Groth16 check: 4 × 6 words = 768 bytes
pub const PAIRING_INPUT_SIZE: usize = GROTH16_PAIRS * PAIRING_ELEMENT_SIZE;

/// Size of the boolean result word (pairing output and program return data)
pub const RESULT_SIZE: usize = 32;

/// Fixed prefix of a wire verifying key: alpha (G1) + beta, gamma, delta (G2)
pub const VK_HEADER_SIZE: usize = G1_SIZE + 3 * G2_SIZE;
