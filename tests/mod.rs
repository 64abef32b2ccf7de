//! Test module organization.
//!
//! This module organizes all integration tests for the floating-point
//! engine.






/// Staged pipeline contract tests.
mod pipeline_tests;

/// Rounding mode and GRS rounder tests.
mod rounding_tests;

/// Stimulus, checker, and compare-flow tests.
mod sim_tests;
