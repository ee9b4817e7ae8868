use std::error::Error;
use std::fs;
use std::path::PathBuf;

use attest_harness::{run_suite, OutputMode, Stopwatch, SuiteSummary};
use clap::{Parser, ValueEnum};

mod suites;

#[derive(Parser, Debug)]
#[command(name = "attest-demo", about = "Runs the attest demonstration suites")]
struct Cli {
    /// Output mode applied to every suite.
    #[arg(long, value_enum, default_value = "standard")]
    mode: Mode,
    /// Run only the named suite; repeat the flag to select several.
    #[arg(long = "suite")]
    suites: Vec<String>,
    /// Optional path where the suite summaries are written as JSON.
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    /// Plain pass/fail output.
    Standard,
    /// Wrap the whole run in a stopwatch.
    Timed,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Standard => OutputMode::Standard,
            Mode::Timed => OutputMode::Timed,
        }
    }
}

/// Exit status is 0 whenever the suites execute: assertion failures are
/// report lines, not exit codes. Only a contract violation or an unwritable
/// summary artefact exits non-zero.
fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mode = OutputMode::from(cli.mode);

    let selected: Vec<_> = suites::PLAN
        .iter()
        .filter(|(name, _)| cli.suites.is_empty() || cli.suites.iter().any(|s| s == name))
        .collect();
    if selected.is_empty() {
        return Err("no suite matches the requested filter".into());
    }

    let stopwatch = matches!(mode, OutputMode::Timed).then(Stopwatch::start);
    let mut summaries: Vec<SuiteSummary> = Vec::with_capacity(selected.len());
    for (name, body) in selected {
        summaries.push(run_suite(name, mode, *body)?);
    }
    if let Some(stopwatch) = stopwatch {
        stopwatch.stop();
    }

    if let Some(path) = &cli.summary_json {
        fs::write(path, serde_json::to_vec_pretty(&summaries)?)?;
    }

    Ok(())
}
