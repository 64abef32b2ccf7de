//! Simulation harness: stimulus generation and result checking.
//!
//! Drives the engine with directed special-value sets and seeded random
//! operands, scoreboards every result against the reference model, and
//! summarizes the outcome per rounding mode.

/// Reference model and scoreboard.
pub mod checker;

/// Directed and random operand generation.
pub mod stimulus;

pub use checker::{canonicalize, reference_add, reference_mul, Mismatch, Scoreboard, Verdict};
pub use stimulus::{directed_pairs, special_values, OperandPair, StimulusGenerator};

use crate::common::error::ConfigError;
use crate::config::Config;
use crate::core::round::RoundingMode;
use crate::core::{add, multiply};
use crate::stats::RunStats;

/// Per-mode scoreboard tallies for one compare run.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeSummary {
    pub mode: RoundingMode,
    pub add_passed: u64,
    pub add_failed: u64,
    pub add_skipped: u64,
    pub mul_passed: u64,
    pub mul_failed: u64,
    pub mul_skipped: u64,
}

/// Outcome of a full compare run.
pub struct CompareReport {
    /// One summary row per rounding mode.
    pub modes: Vec<ModeSummary>,
    /// Every recorded disagreement.
    pub mismatches: Vec<Mismatch>,
    /// Operation and result statistics.
    pub stats: RunStats,
}

impl CompareReport {
    /// Total number of failed checks across all modes.
    pub fn total_failed(&self) -> u64 {
        self.modes
            .iter()
            .map(|m| m.add_failed + m.mul_failed)
            .sum()
    }

    /// Prints the per-mode summary table.
    pub fn print_summary(&self) {
        println!();
        println!("--- Comparison Summary ---");
        println!(
            "{:<8} | {:<13} | {:<24} | {:<24}",
            "Verdict", "Rounding Mode", "ADD (pass/fail/skip)", "MUL (pass/fail/skip)"
        );
        println!("{}", "-".repeat(78));
        for m in &self.modes {
            let verdict = if m.add_failed + m.mul_failed == 0 {
                "PASS"
            } else {
                "FAIL"
            };
            println!(
                "{:<8} | {:<13} | {:<24} | {:<24}",
                verdict,
                m.mode.name(),
                format!("{} / {} / {}", m.add_passed, m.add_failed, m.add_skipped),
                format!("{} / {} / {}", m.mul_passed, m.mul_failed, m.mul_skipped),
            );
        }
    }
}

/// Runs the full compare flow for a configuration: directed pairs (when
/// enabled) plus seeded random pairs, for every rounding mode, through
/// both the adder and the multiplier.
pub fn run_compare(config: &Config) -> Result<CompareReport, ConfigError> {
    let params = config.engine.format_params()?;
    let max_exp = config.stimulus.max_exponent_val(&params);

    let mut stats = RunStats::new();
    let mut scoreboard = Scoreboard::new(params);
    let mut modes = Vec::new();

    for (i, mode) in RoundingMode::all().into_iter().enumerate() {
        let mut pairs = Vec::new();
        if config.stimulus.directed_specials {
            pairs.extend(directed_pairs(&params));
        }
        let mut generator = StimulusGenerator::new(
            params,
            config.stimulus.seed.wrapping_add(i as u64),
            config.stimulus.min_exponent,
            max_exp,
        );
        pairs.extend(generator.random_pairs(config.stimulus.count));

        let mut summary = ModeSummary {
            mode,
            ..ModeSummary::default()
        };

        for pair in &pairs {
            let got = add(pair.a, pair.b, mode, &params);
            stats.adds += 1;
            stats.record_result(got, &params);
            match scoreboard.check_add(pair.a, pair.b, mode, got) {
                Verdict::Pass => summary.add_passed += 1,
                Verdict::Fail => summary.add_failed += 1,
                Verdict::Skip => summary.add_skipped += 1,
            }

            let got = multiply(pair.a, pair.b, mode, &params);
            stats.muls += 1;
            stats.record_result(got, &params);
            match scoreboard.check_mul(pair.a, pair.b, mode, got) {
                Verdict::Pass => summary.mul_passed += 1,
                Verdict::Fail => summary.mul_failed += 1,
                Verdict::Skip => summary.mul_skipped += 1,
            }
        }

        modes.push(summary);
    }

    stats.checks_passed = modes.iter().map(|m| m.add_passed + m.mul_passed).sum();
    stats.checks_failed = modes.iter().map(|m| m.add_failed + m.mul_failed).sum();
    stats.checks_skipped = modes.iter().map(|m| m.add_skipped + m.mul_skipped).sum();

    Ok(CompareReport {
        modes,
        mismatches: scoreboard.mismatches,
        stats,
    })
}
