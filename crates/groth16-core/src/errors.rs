//! Error types for the Groth16 verifier
//!
//! A rejected proof is not an error: `verify` returns `Ok(false)` once the
//! pairing check has run. Errors mean the check could not be performed.

use thiserror::Error;

/// Top-level verification error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("Malformed calldata: {0}")]
    MalformedCalldata(#[from] CalldataError),

    #[error("Input arity mismatch: key expects {expected} public inputs, got {actual}")]
    InputArityMismatch { expected: usize, actual: usize },

    #[error("Verification unavailable: {0}")]
    VerificationUnavailable(#[from] Bn254Error),
}

impl VerifyError {
    /// Stable numeric code, surfaced as `ProgramError::Custom` by the programs
    pub const fn code(&self) -> u32 {
        match self {
            VerifyError::MalformedCalldata(_) => 0x100,
            VerifyError::InputArityMismatch { .. } => 0x101,
            VerifyError::VerificationUnavailable(_) => 0x102,
        }
    }
}

/// Calldata decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalldataError {
    #[error("Invalid calldata size: expected {expected}, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    #[error("Public input {index} is not below the scalar field modulus")]
    InvalidScalar { index: usize },
}

/// Verification key parsing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Invalid VK size: expected {expected}, got {actual}")]
    InvalidSize { expected: usize, actual: usize },
}

/// The three alt_bn128 host services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Addition,
    Multiplication,
    Pairing,
}

/// BN254 operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Bn254Error {
    #[error("alt_bn128 {op:?} call failed")]
    PrimitiveCallFailed { op: Primitive },

    #[error("alt_bn128 {op:?} returned {len} bytes of unexpected output")]
    UnexpectedOutput { op: Primitive, len: usize },

    #[error("Invalid G1 point")]
    InvalidG1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let malformed = VerifyError::from(CalldataError::InvalidSize {
            expected: 288,
            actual: 0,
        });
        let arity = VerifyError::InputArityMismatch {
            expected: 1,
            actual: 2,
        };
        let unavailable = VerifyError::from(Bn254Error::PrimitiveCallFailed {
            op: Primitive::Pairing,
        });

        assert_eq!(malformed.code(), 0x100);
        assert_eq!(arity.code(), 0x101);
        assert_eq!(unavailable.code(), 0x102);
    }

    #[test]
    fn test_error_display() {
        let err = VerifyError::from(CalldataError::InvalidSize {
            expected: 288,
            actual: 287,
        });
        assert_eq!(
            err.to_string(),
            "Malformed calldata: Invalid calldata size: expected 288, got 287"
        );

        let err = Bn254Error::PrimitiveCallFailed {
            op: Primitive::Multiplication,
        };
        assert_eq!(err.to_string(), "alt_bn128 Multiplication call failed");
    }
}
