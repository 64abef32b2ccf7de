//! Rounding modes and the guard/round/sticky rounder.
//!
//! Given an over-wide significand, a sign, and a rounding mode, the
//! rounder decides whether the truncated result must be incremented and
//! reports the carry out of that increment. The decision is a pure, total
//! function with no failure modes.

use crate::common::error::ConfigError;

/// IEEE 754 rounding mode, with the 3-bit wire encoding of the rounder
/// port: RNE=000, RTZ=001, RPI=010, RNI=011, RNA=100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round to nearest, ties to even.
    #[default]
    Rne,
    /// Round towards zero.
    Rtz,
    /// Round towards positive infinity.
    Rpi,
    /// Round towards negative infinity.
    Rni,
    /// Round to nearest, ties away from zero.
    Rna,
}

impl RoundingMode {
    /// Decodes the 3-bit wire encoding.
    pub fn from_bits(bits: u8) -> Result<Self, ConfigError> {
        match bits {
            0b000 => Ok(RoundingMode::Rne),
            0b001 => Ok(RoundingMode::Rtz),
            0b010 => Ok(RoundingMode::Rpi),
            0b011 => Ok(RoundingMode::Rni),
            0b100 => Ok(RoundingMode::Rna),
            b => Err(ConfigError::InvalidRoundingMode(format!("{:#05b}", b))),
        }
    }

    /// Encodes the mode as its 3-bit wire value.
    pub fn to_bits(self) -> u8 {
        match self {
            RoundingMode::Rne => 0b000,
            RoundingMode::Rtz => 0b001,
            RoundingMode::Rpi => 0b010,
            RoundingMode::Rni => 0b011,
            RoundingMode::Rna => 0b100,
        }
    }

    /// Parses a lowercase mode name ("rne", "rtz", "rpi", "rni", "rna").
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "rne" => Ok(RoundingMode::Rne),
            "rtz" => Ok(RoundingMode::Rtz),
            "rpi" => Ok(RoundingMode::Rpi),
            "rni" => Ok(RoundingMode::Rni),
            "rna" => Ok(RoundingMode::Rna),
            s => Err(ConfigError::InvalidRoundingMode(s.to_string())),
        }
    }

    /// The lowercase mode name.
    pub fn name(self) -> &'static str {
        match self {
            RoundingMode::Rne => "rne",
            RoundingMode::Rtz => "rtz",
            RoundingMode::Rpi => "rpi",
            RoundingMode::Rni => "rni",
            RoundingMode::Rna => "rna",
        }
    }

    /// All five modes, for sweep-style testing and stimulus.
    pub fn all() -> [RoundingMode; 5] {
        [
            RoundingMode::Rne,
            RoundingMode::Rtz,
            RoundingMode::Rpi,
            RoundingMode::Rni,
            RoundingMode::Rna,
        ]
    }
}

/// Right-shifts a value, folding every shifted-out bit into the result's
/// LSB as a sticky bit.
///
/// A plain shift would discard the OR of the shifted-out bits, which the
/// rounder needs to separate an exact tie from a value just above it.
pub fn shift_right_sticky(value: u128, shift: u32) -> u128 {
    if shift == 0 {
        return value;
    }
    if shift >= 128 {
        return (value != 0) as u128;
    }
    let lost = value & ((1u128 << shift) - 1);
    (value >> shift) | (lost != 0) as u128
}

/// Decides whether the kept bits must be incremented.
///
/// Splits `value` at `shift_amount`: the guard bit is the MSB of the
/// discarded region, the round bit the next lower bit, and the sticky bit
/// the OR of everything below. With `shift_amount` of zero there is
/// nothing to discard and no increment.
///
/// | mode | increment condition |
/// |------|---------------------|
/// | RNE  | g & (lsb \| r \| s) |
/// | RTZ  | never               |
/// | RPI  | !sign & (g\|r\|s)   |
/// | RNI  | sign & (g\|r\|s)    |
/// | RNA  | g                   |
pub fn round_increment(value: u128, sign: bool, mode: RoundingMode, shift_amount: u32) -> bool {
    if shift_amount == 0 {
        return false;
    }

    let lsb = (value >> shift_amount) & 1 != 0;
    let g = (value >> (shift_amount - 1)) & 1 != 0;
    let r = if shift_amount >= 2 {
        (value >> (shift_amount - 2)) & 1 != 0
    } else {
        false
    };
    let s = if shift_amount >= 3 {
        value & ((1u128 << (shift_amount - 2)) - 1) != 0
    } else {
        false
    };

    let inexact = g | r | s;
    match mode {
        RoundingMode::Rne => g && (lsb | r | s),
        RoundingMode::Rtz => false,
        RoundingMode::Rpi => !sign && inexact,
        RoundingMode::Rni => sign && inexact,
        RoundingMode::Rna => g,
    }
}

/// Truncates `value` by `shift_amount` bits, applies the rounding
/// decision, and reports carry out of the kept width.
///
/// # Returns
///
/// The rounded value masked to `kept_width` bits, and `true` when the
/// increment carried past the maximum representable kept value (all-ones
/// rolls over to all-zeros with carry).
pub fn round_significand(
    value: u128,
    sign: bool,
    mode: RoundingMode,
    shift_amount: u32,
    kept_width: u32,
) -> (u64, bool) {
    let kept = (value >> shift_amount) as u64;
    let increment = round_increment(value, sign, mode, shift_amount) as u64;
    let rounded = kept + increment;
    let overflow = rounded >> kept_width != 0;
    let mask = if kept_width >= 64 {
        u64::MAX
    } else {
        (1u64 << kept_width) - 1
    };
    (rounded & mask, overflow)
}
