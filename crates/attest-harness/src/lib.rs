#![deny(missing_docs)]
#![doc = "Suite runner and verdict reporting around the attest comparison engine."]

/// Structured harness errors.
pub mod errors;
/// Suite summary report types.
pub mod report;
/// Suite run context, assertion surface, and the runner.
pub mod suite;
/// Passive stopwatch for timed runs.
#[cfg(feature = "timing")]
pub mod timer;

pub use errors::HarnessError;
pub use report::SuiteSummary;
pub use suite::{run_suite, run_suite_to, Expectation, OutputMode, SuiteRun};
#[cfg(feature = "timing")]
pub use timer::Stopwatch;
