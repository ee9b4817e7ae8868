//! Suite summary report emitted by the runner.

use serde::{Deserialize, Serialize};

/// Pass/run tally for one executed suite.
///
/// Returned by the runner so programmatic callers do not need to scrape the
/// console transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteSummary {
    /// Name announced when the suite started.
    pub name: String,
    /// Number of assertions executed.
    pub run: u32,
    /// Number of assertions whose verdict was a pass.
    pub passed: u32,
}

impl SuiteSummary {
    /// Returns whether every executed assertion passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.run
    }
}
