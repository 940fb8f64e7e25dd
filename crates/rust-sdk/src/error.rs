//! Error types for the Groth16 Solana SDK

use groth16_solana_core::ResultError;
use solana_client::client_error::ClientError as RpcClientError;
use thiserror::Error;

/// Errors that can occur while asking the verifier about a proof
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No bridge program configured")]
    BridgeNotConfigured,

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Transaction confirmation timeout")]
    ConfirmationTimeout,

    #[error("Verifier set no return data")]
    MissingReturnData,

    #[error("Return data came from {actual}, expected {expected}")]
    UnexpectedResponder { expected: String, actual: String },

    #[error("Return data is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("Malformed result word: {0}")]
    MalformedResult(#[from] ResultError),

    #[error("RPC error: {0}")]
    RpcError(#[from] RpcClientError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
