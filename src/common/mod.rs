//! Common types shared across the floating-point engine.
//!
//! This module provides the bit-field model for the supported IEEE 754
//! formats and the error type reported for invalid configurations.

/// Configuration error definitions.
pub mod error;

/// IEEE 754 bit-field model (widths, bias, canonical patterns).
pub mod format;

/// Radix-tagged bit-pattern parsing and rendering.
pub mod radix;

pub use error::ConfigError;
pub use format::FormatParams;
