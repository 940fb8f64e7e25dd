//! 32-byte verification result word
//!
//! The verifier program answers with `0…00` (rejected) or `0…01` (accepted).
//! Callers accept any word whose last byte is non-zero as `true` and the
//! all-zero word as `false`. Everything else is a protocol violation and is
//! never coerced to either answer.

use crate::constants::RESULT_SIZE;
use thiserror::Error;

/// A result word that cannot be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    #[error("Result word must be 32 bytes, got {len}")]
    InvalidLength { len: usize },

    #[error("Result word has non-zero high bytes and a zero last byte")]
    NonCanonical,
}

/// Encode a verification outcome as the canonical result word
pub const fn encode_result(valid: bool) -> [u8; RESULT_SIZE] {
    let mut word = [0u8; RESULT_SIZE];
    word[RESULT_SIZE - 1] = valid as u8;
    word
}

/// Interpret a result word returned by a verifier
pub fn decode_result(word: &[u8]) -> Result<bool, ResultError> {
    if word.len() != RESULT_SIZE {
        return Err(ResultError::InvalidLength { len: word.len() });
    }
    if word[RESULT_SIZE - 1] != 0 {
        return Ok(true);
    }
    if word.iter().all(|&b| b == 0) {
        return Ok(false);
    }
    Err(ResultError::NonCanonical)
}
