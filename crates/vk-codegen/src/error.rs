//! Error types for key loading and rendering

use thiserror::Error;

/// Result type for codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Failed to read arkworks data: {0}")]
    Deserialize(#[from] ark_serialize::SerializationError),

    #[error("Circuit synthesis failed: {0}")]
    Synthesis(#[from] ark_relations::r1cs::SynthesisError),

    #[error("Expected 128 (compressed) or 256 (uncompressed) bytes of arkworks proof, got {actual}")]
    InvalidProofLength { actual: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
