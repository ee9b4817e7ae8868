//! Suite run context, assertion surface, and the suite runner.

use std::io::{self, Write};

use attest_core::{almost_eq_slices, eq_scalar, eq_slices, Comparable, ToleranceProfile};
use serde::{Deserialize, Serialize};

use crate::errors::HarnessError;
use crate::report::SuiteSummary;

/// Caller-declared intent for a single assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    /// The compared values are expected to match.
    Equal,
    /// The compared values are expected to differ.
    NotEqual,
}

/// Output flavour requested for a suite run.
///
/// `Timed` is accepted and recorded but does not change assertion behaviour;
/// it is the hook for timing-annotated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Plain pass/fail lines.
    Standard,
    /// Reserved for timing-annotated output.
    Timed,
}

/// Mutable context for one suite invocation.
///
/// Owns the pass/run counters and the tolerance profile, so repeated or
/// isolated suite runs never share state. Created by [`run_suite`]; suite
/// bodies receive it by mutable reference.
pub struct SuiteRun<'a> {
    profile: ToleranceProfile,
    mode: OutputMode,
    run: u32,
    passed: u32,
    out: &'a mut dyn Write,
}

impl<'a> SuiteRun<'a> {
    fn new(mode: OutputMode, out: &'a mut dyn Write) -> Self {
        Self {
            profile: ToleranceProfile::default(),
            mode,
            run: 0,
            passed: 0,
            out,
        }
    }

    /// Replaces the default single-precision tolerance for this run.
    pub fn set_single_precision_tolerance(&mut self, tolerance: f32) {
        self.profile.set_single(tolerance);
    }

    /// Replaces the default double-precision tolerance for this run.
    pub fn set_double_precision_tolerance(&mut self, tolerance: f64) {
        self.profile.set_double(tolerance);
    }

    /// Returns the output mode the suite was started with.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Number of assertions executed so far.
    pub fn tests_run(&self) -> u32 {
        self.run
    }

    /// Number of assertions passed so far.
    pub fn tests_passed(&self) -> u32 {
        self.passed
    }

    /// Records a scalar equality assertion and returns its verdict.
    pub fn assert_equal<T: Comparable>(
        &mut self,
        expectation: Expectation,
        a: T,
        b: T,
    ) -> Result<bool, HarnessError> {
        let matched = eq_scalar(a, b, &self.profile);
        self.record(matched, expectation)
    }

    /// Records a slice equality assertion under the profile tolerances.
    pub fn assert_array_equal<T: Comparable>(
        &mut self,
        expectation: Expectation,
        a: &[T],
        b: &[T],
    ) -> Result<bool, HarnessError> {
        let matched = eq_slices(a, b, &self.profile)?;
        self.record(matched, expectation)
    }

    /// Records a slice assertion under an explicit tolerance.
    pub fn assert_array_almost_equal<T: Comparable>(
        &mut self,
        expectation: Expectation,
        a: &[T],
        b: &[T],
        tolerance: T::Tolerance,
    ) -> Result<bool, HarnessError> {
        let matched = almost_eq_slices(a, b, tolerance)?;
        self.record(matched, expectation)
    }

    fn record(&mut self, matched: bool, expectation: Expectation) -> Result<bool, HarnessError> {
        let pass = matched == (expectation == Expectation::Equal);
        self.run += 1;
        if pass {
            self.passed += 1;
        }
        let verdict = if pass { "passed" } else { "failed" };
        writeln!(self.out, "Test {} {}", self.run, verdict)?;
        self.out.flush()?;
        Ok(pass)
    }
}

/// Runs a suite against the provided output sink.
///
/// Writes the header, executes the body with a fresh [`SuiteRun`], then
/// writes the pass/run summary and trailer. The summary is written even when
/// the body aborts with an error, so a partial run still reports the
/// assertions that executed.
pub fn run_suite_to<F>(
    name: &str,
    mode: OutputMode,
    out: &mut dyn Write,
    body: F,
) -> Result<SuiteSummary, HarnessError>
where
    F: FnOnce(&mut SuiteRun<'_>) -> Result<(), HarnessError>,
{
    writeln!(out, "Running tests for: '{name}'")?;
    out.flush()?;

    let mut suite = SuiteRun::new(mode, &mut *out);
    let outcome = body(&mut suite);
    let summary = SuiteSummary {
        name: name.to_string(),
        run: suite.run,
        passed: suite.passed,
    };

    writeln!(out, "Passed {} out of {} tests", summary.passed, summary.run)?;
    writeln!(out)?;
    writeln!(out, "Finished test suite")?;
    out.flush()?;

    outcome?;
    Ok(summary)
}

/// Runs a suite, reporting to standard output.
pub fn run_suite<F>(name: &str, mode: OutputMode, body: F) -> Result<SuiteSummary, HarnessError>
where
    F: FnOnce(&mut SuiteRun<'_>) -> Result<(), HarnessError>,
{
    let mut stdout = io::stdout();
    run_suite_to(name, mode, &mut stdout, body)
}
