//! Structured error types for the verdict and reporting layer.

use attest_core::CompareError;
use thiserror::Error;

/// Canonical error type for suite execution.
///
/// An assertion mismatch is never an error; it is a recorded verdict. Errors
/// cover the hardened slice-length contract and report-sink failures only.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A comparison was handed slices of different lengths.
    #[error(transparent)]
    Contract(#[from] CompareError),
    /// A report line could not be written to the output sink.
    #[error("failed to write report line: {0}")]
    Report(#[from] std::io::Error),
}
