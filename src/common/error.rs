//! Configuration error definitions.
//!
//! Well-formed inputs of a supported width never fail at runtime: every
//! bit pattern, including every special value, maps deterministically to a
//! defined output. The only failure conditions in the engine are invalid
//! configurations, which are rejected at construction time through the
//! `ConfigError` type defined here.

use std::fmt;

/// Error raised when the engine is constructed with invalid parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Total width is not one of the supported IEEE 754 widths (16, 32, 64).
    UnsupportedWidth(u32),

    /// Guard-bit count is below the minimum of 3 required for correct
    /// guard/round/sticky separation.
    GuardBitsTooSmall(u32),

    /// Guard-bit count is too large for the engine's 128-bit internal
    /// datapath at the requested width.
    GuardBitsTooLarge(u32),

    /// Pipeline latency must be at least one tick.
    InvalidLatency(usize),

    /// Rounding-mode name or wire encoding was not recognized.
    InvalidRoundingMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedWidth(w) => {
                write!(f, "unsupported width {} (expected 16, 32, or 64)", w)
            }
            ConfigError::GuardBitsTooSmall(g) => {
                write!(f, "guard bits {} below minimum of 3", g)
            }
            ConfigError::GuardBitsTooLarge(g) => {
                write!(f, "guard bits {} exceed internal datapath width", g)
            }
            ConfigError::InvalidLatency(l) => {
                write!(f, "pipeline latency {} must be at least 1", l)
            }
            ConfigError::InvalidRoundingMode(s) => {
                write!(f, "invalid rounding mode '{}'", s)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
