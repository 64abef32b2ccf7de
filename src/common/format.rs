//! IEEE 754 bit-field model.
//!
//! Derives, from a total width, the exponent width, bias, mantissa width,
//! and the canonical bit patterns for the special values. Pure data: all
//! behavior lives in the unpacker, rounder, adder, and multiplier.

use crate::common::error::ConfigError;

/// Minimum guard-bit count required for correct guard/round/sticky
/// separation during rounding.
pub const MIN_GUARD_BITS: u32 = 3;

/// Bit-field parameters for one IEEE 754 binary format.
///
/// Constructed only through [`FormatParams::new`], which rejects
/// unsupported widths and degenerate guard-bit counts instead of silently
/// producing zero-width fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatParams {
    /// Total width of the format in bits (16, 32, or 64).
    pub total_width: u32,
    /// Width of the biased-exponent field in bits.
    pub exponent_width: u32,
    /// Width of the stored mantissa field in bits (excluding implicit bit).
    pub mantissa_width: u32,
    /// Exponent bias.
    pub bias: i32,
    /// Extra low-order bits carried through alignment and rounding.
    pub guard_bits: u32,
}

impl FormatParams {
    /// Builds the bit-field model for a supported width.
    ///
    /// # Arguments
    ///
    /// * `total_width` - Format width in bits; must be 16, 32, or 64.
    /// * `guard_bits` - Internal precision bits; must be at least 3 and
    ///   small enough that the widened adder significand fits the 128-bit
    ///   internal datapath.
    ///
    /// # Returns
    ///
    /// The format parameters, or a `ConfigError` describing the rejected
    /// configuration.
    pub fn new(total_width: u32, guard_bits: u32) -> Result<Self, ConfigError> {
        let exponent_width = match total_width {
            16 => 5,
            32 => 8,
            64 => 11,
            w => return Err(ConfigError::UnsupportedWidth(w)),
        };
        if guard_bits < MIN_GUARD_BITS {
            return Err(ConfigError::GuardBitsTooSmall(guard_bits));
        }
        let mantissa_width = total_width - 1 - exponent_width;
        // Aligned significand plus carry bit must fit in u128.
        if mantissa_width + 2 + guard_bits > 127 {
            return Err(ConfigError::GuardBitsTooLarge(guard_bits));
        }
        Ok(FormatParams {
            total_width,
            exponent_width,
            mantissa_width,
            bias: (1 << (exponent_width - 1)) - 1,
            guard_bits,
        })
    }

    /// Builds the bit-field model with the default guard-bit count for
    /// the width: 32 bits for binary16, 7 bits for binary32 and binary64.
    pub fn with_default_guard(total_width: u32) -> Result<Self, ConfigError> {
        let guard_bits = match total_width {
            16 => 32,
            _ => 7,
        };
        Self::new(total_width, guard_bits)
    }

    /// All-ones exponent field (infinity and NaN encodings).
    pub fn exp_all_ones(&self) -> u32 {
        (1 << self.exponent_width) - 1
    }

    /// Mask covering the stored mantissa field.
    pub fn mantissa_mask(&self) -> u64 {
        (1u64 << self.mantissa_width) - 1
    }

    /// Mask covering the sign bit.
    pub fn sign_mask(&self) -> u64 {
        1u64 << (self.total_width - 1)
    }

    /// Mask covering all bits of the format.
    pub fn value_mask(&self) -> u64 {
        if self.total_width == 64 {
            u64::MAX
        } else {
            (1u64 << self.total_width) - 1
        }
    }

    /// Top mantissa bit, distinguishing quiet from signaling NaNs.
    pub fn quiet_bit(&self) -> u64 {
        1u64 << (self.mantissa_width - 1)
    }

    /// Canonical quiet NaN: sign 0, exponent all-ones, mantissa MSB set.
    pub fn quiet_nan(&self) -> u64 {
        ((self.exp_all_ones() as u64) << self.mantissa_width) | self.quiet_bit()
    }

    /// Positive zero pattern.
    pub fn pos_zero(&self) -> u64 {
        0
    }

    /// Negative zero pattern.
    pub fn neg_zero(&self) -> u64 {
        self.sign_mask()
    }

    /// Positive infinity pattern.
    pub fn pos_inf(&self) -> u64 {
        (self.exp_all_ones() as u64) << self.mantissa_width
    }

    /// Negative infinity pattern.
    pub fn neg_inf(&self) -> u64 {
        self.sign_mask() | self.pos_inf()
    }

    /// Signed zero pattern for the given sign.
    pub fn signed_zero(&self, sign: bool) -> u64 {
        if sign {
            self.neg_zero()
        } else {
            self.pos_zero()
        }
    }

    /// Signed infinity pattern for the given sign.
    pub fn signed_inf(&self, sign: bool) -> u64 {
        if sign {
            self.neg_inf()
        } else {
            self.pos_inf()
        }
    }

    /// Packs sign, biased exponent, and mantissa into a bit pattern.
    pub fn pack(&self, sign: bool, exponent: u32, mantissa: u64) -> u64 {
        ((sign as u64) << (self.total_width - 1))
            | ((exponent as u64) << self.mantissa_width)
            | (mantissa & self.mantissa_mask())
    }
}
