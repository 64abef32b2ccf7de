//! The arithmetic engine.
//!
//! Data flows unpack -> (alignment or product) -> normalization -> GRS
//! rounding -> packing, for both addition and multiplication. Every value
//! is created fresh per operation; there is no state shared between
//! invocations. The `pipeline` module layers the staged execution contract
//! on top of the stateless operations.

/// Adder core (align, add/subtract, normalize, round, pack).
pub mod adder;

/// Multiplier core (sign, exponent, significand product, round, pack).
pub mod multiplier;

/// Fixed-latency staged execution contract.
pub mod pipeline;

/// Rounding modes and the guard/round/sticky rounder.
pub mod round;

/// Operand unpacking and classification.
pub mod unpack;

pub use adder::add;
pub use multiplier::multiply;
pub use pipeline::{FpOp, FpPipeline, FpRequest};
pub use round::RoundingMode;
pub use unpack::{classify, unpack, Category, ClassifyFlags, Operand};
