//! Bit-exact IEEE 754 binary floating-point engine.
//!
//! This crate implements a configurable, bit-accurate model of a hardware
//! floating-point unit: addition, multiplication, and classification over
//! the binary16/32/64 formats, under explicit control of internal guard-bit
//! precision and all five standard rounding modes. It serves both as the
//! numerical behavior a hardware pipeline must reproduce and as a
//! trustworthy golden model for verification.
//!
//! # Architecture
//!
//! * **Core**: unpack -> align/multiply -> normalize -> GRS round -> pack,
//!   with special values (zero, infinity, NaN) bypassing the numeric path.
//! * **Pipeline**: an optional staged contract delivering each result a
//!   fixed number of ticks after issue, in strict input order.
//! * **Sim**: stimulus generation and a scoreboard comparing engine output
//!   against a native floating-point reference.
//!
//! # Modules
//!
//! * `common`: Format parameters, error types, and shared constants.
//! * `config`: Configuration loading and parsing.
//! * `core`: The arithmetic engine (unpacker, rounder, adder, multiplier,
//!   staged pipeline).
//! * `sim`: Stimulus generation and result checking.
//! * `stats`: Operation statistics collection.

/// Format parameters, error types, and shared constants.
///
/// Provides the bit-field model for each supported width and the
/// configuration error type used throughout the engine.
pub mod common;

/// Configuration system for engine, pipeline, and stimulus settings.
///
/// Loads and parses TOML configuration files to customize engine behavior
/// for different widths, guard-bit precisions, and test scenarios.
pub mod config;

/// The arithmetic engine.
///
/// Implements operand unpacking and classification, guard/round/sticky
/// rounding, the adder and multiplier cores, and the fixed-latency
/// staged pipeline wrapper.
pub mod core;

/// Stimulus generation and result checking.
///
/// Supplies directed special-value operand sets and seeded random operands,
/// and scoreboards engine results against a native floating-point reference.
pub mod sim;

/// Operation statistics collection and reporting.
///
/// Tracks operation counts, special-case bypasses, overflow and underflow
/// events, and checker mismatches.
pub mod stats;
