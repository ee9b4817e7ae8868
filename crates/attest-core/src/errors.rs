//! Structured error types shared across attest crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical error type for the comparison engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum CompareError {
    /// The two slices handed to a comparison had different lengths.
    #[error("slice length mismatch: left has {left} elements, right has {right}")]
    LengthMismatch {
        /// Element count of the left-hand slice.
        left: usize,
        /// Element count of the right-hand slice.
        right: usize,
    },
}
