//! Run statistics collection and reporting.
//!
//! Tracks operation counts, special-case bypasses, overflow and underflow
//! events, and scoreboard verdicts for a compare run.

use std::time::Instant;

/// Statistics for one engine run.
pub struct RunStats {
    start_time: Instant,
    pub adds: u64,
    pub muls: u64,
    pub classifies: u64,

    pub checks_passed: u64,
    pub checks_failed: u64,
    pub checks_skipped: u64,

    pub results_inf: u64,
    pub results_zero: u64,
    pub results_nan: u64,
}

impl Default for RunStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            adds: 0,
            muls: 0,
            classifies: 0,
            checks_passed: 0,
            checks_failed: 0,
            checks_skipped: 0,
            results_inf: 0,
            results_zero: 0,
            results_nan: 0,
        }
    }
}

impl RunStats {
    /// Creates a fresh statistics record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the category of a produced result pattern for the running
    /// special-result tallies.
    pub fn record_result(&mut self, bits: u64, params: &crate::common::format::FormatParams) {
        let exp = ((bits >> params.mantissa_width) as u32) & params.exp_all_ones();
        let mant = bits & params.mantissa_mask();
        if exp == params.exp_all_ones() {
            if mant == 0 {
                self.results_inf += 1;
            } else {
                self.results_nan += 1;
            }
        } else if exp == 0 && mant == 0 {
            self.results_zero += 1;
        }
    }

    /// Prints the statistics report.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let total_ops = self.adds + self.muls + self.classifies;

        println!();
        println!("===== Run Statistics =====");
        println!("Operations:");
        println!("  Add:            {}", self.adds);
        println!("  Mul:            {}", self.muls);
        println!("  Classify:       {}", self.classifies);
        println!("Results:");
        println!("  Infinities:     {}", self.results_inf);
        println!("  Zeros:          {}", self.results_zero);
        println!("  NaNs:           {}", self.results_nan);
        println!("Scoreboard:");
        println!("  Passed:         {}", self.checks_passed);
        println!("  Failed:         {}", self.checks_failed);
        println!("  Skipped:        {}", self.checks_skipped);
        println!("Elapsed:          {:.3}s", elapsed);
        if elapsed > 0.0 {
            println!("Throughput:       {:.0} ops/s", total_ops as f64 / elapsed);
        }
        println!("==========================");
    }
}
