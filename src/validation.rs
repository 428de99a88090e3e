//! Input validation for the batch scheduler.
//!
//! Checks structural integrity of the caller-supplied time sequences
//! before scheduling. Detects:
//! - Arrival/burst sequences of different lengths
//! - Empty input (nothing to schedule)
//!
//! These are the only failure modes: over well-formed input the
//! computation is total, so no further checks exist.

use std::error::Error;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), InvalidInput>;

/// The single error kind of this crate.
///
/// Covers both malformed-input conditions: mismatched sequence lengths
/// and empty input. Fatal to the call that produced it; there is no
/// recovery or partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput {
    message: String,
}

impl InvalidInput {
    /// Creates a length-mismatch error.
    pub fn length_mismatch(arrival_len: usize, burst_len: usize) -> Self {
        Self {
            message: format!(
                "arrival/burst sequences differ in length: {arrival_len} vs {burst_len}"
            ),
        }
    }

    /// Creates an empty-input error.
    pub fn empty() -> Self {
        Self {
            message: "no processes to schedule".to_string(),
        }
    }

    /// Human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: {}", self.message)
    }
}

impl Error for InvalidInput {}

/// Validates the caller-supplied time sequences.
///
/// Checks:
/// 1. Both sequences have the same length
/// 2. The input is non-empty (N ≥ 1)
///
/// # Returns
/// `Ok(())` if both checks pass, `Err(InvalidInput)` otherwise.
pub fn validate_times(arrival_times: &[i64], burst_times: &[i64]) -> ValidationResult {
    if arrival_times.len() != burst_times.len() {
        return Err(InvalidInput::length_mismatch(
            arrival_times.len(),
            burst_times.len(),
        ));
    }
    if arrival_times.is_empty() {
        return Err(InvalidInput::empty());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        assert!(validate_times(&[0, 1, 2], &[3, 4, 2]).is_ok());
        assert!(validate_times(&[0], &[1]).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let err = validate_times(&[0, 1, 2], &[3, 4]).unwrap_err();
        assert!(err.message().contains("3 vs 2"));
        assert!(err.to_string().starts_with("invalid input:"));
    }

    #[test]
    fn test_empty_input() {
        let err = validate_times(&[], &[]).unwrap_err();
        assert_eq!(err, InvalidInput::empty());
    }

    #[test]
    fn test_mismatch_reported_before_empty() {
        // One empty side is a length mismatch, not an empty input
        let err = validate_times(&[], &[1]).unwrap_err();
        assert_eq!(err, InvalidInput::length_mismatch(0, 1));
    }
}
