//! Passive stopwatch printed alongside timed runs.

use std::time::{Duration, Instant};

/// Monotonic stopwatch.
///
/// Independent of the pass/fail counters; stopping prints the elapsed time
/// in the library's stable report format.
#[derive(Debug)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Starts a stopwatch at the current monotonic instant.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Returns the elapsed time without printing.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Stops the stopwatch, printing the elapsed seconds.
    pub fn stop(self) -> Duration {
        let elapsed = self.elapsed();
        println!("CPU time is {:.6} seconds", elapsed.as_secs_f64());
        elapsed
    }
}
