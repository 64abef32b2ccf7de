//! Operand stimulus generation.
//!
//! Supplies the directed special-value sets (signed zeros, infinities,
//! quiet and signaling NaNs, representative normals and denormals) and
//! seeded random normal operands under a width-appropriate exponent-range
//! constraint.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::format::FormatParams;

/// One pair of operand bit patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperandPair {
    /// First operand bit pattern.
    pub a: u64,
    /// Second operand bit pattern.
    pub b: u64,
}

/// The eight directed special values: signed zeros, signed infinities,
/// signed quiet NaNs, and signed signaling NaNs.
pub fn special_values(params: &FormatParams) -> Vec<u64> {
    let qnan = params.quiet_nan();
    let snan = params.pos_inf() | 1;
    vec![
        params.pos_zero(),
        params.neg_zero(),
        params.pos_inf(),
        params.neg_inf(),
        qnan,
        params.sign_mask() | qnan,
        snan,
        params.sign_mask() | snan,
    ]
}

/// Representative normal and denormal values for the width, including the
/// smallest denormal.
pub fn directed_values(params: &FormatParams) -> Vec<u64> {
    match params.total_width {
        16 => vec![
            0x3C00, // 1.0
            0xC000, // -2.0
            0x4000, // 2.0
            0x3800, // 0.5
            0x7BFF, // Max normal
            0x06F3, // Denormal
            0x02AB, // Denormal
            0x82AB, // Denormal (negative)
            0x0001, // Smallest denormal
        ],
        32 => vec![
            0x3F80_0000, // 1.0
            0xC000_0000, // -2.0
            0x4000_0000, // 2.0
            0x3F00_0000, // 0.5
            0x7F7F_FFFF, // Max normal
            0x0040_0001, // Denormal
            0x8040_0001, // Denormal (negative)
            0x0000_0001, // Smallest denormal
        ],
        _ => vec![
            0x3FF0_0000_0000_0000, // 1.0
            0xC000_0000_0000_0000, // -2.0
            0x4000_0000_0000_0000, // 2.0
            0x3FE0_0000_0000_0000, // 0.5
            0x7FEF_FFFF_FFFF_FFFF, // Max normal
            0x0008_0000_0000_0001, // Denormal
            0x8008_0000_0000_0001, // Denormal (negative)
            0x0000_0000_0000_0001, // Smallest denormal
        ],
    }
}

/// Cross products of the special values against the directed value table,
/// in both operand orders, keeping only pairs that involve at least one
/// special value.
pub fn directed_pairs(params: &FormatParams) -> Vec<OperandPair> {
    let specials = special_values(params);
    let mut all = specials.clone();
    all.extend(directed_values(params));

    let mut pairs = Vec::new();
    for &a in &all {
        for &b in &all {
            if specials.contains(&a) || specials.contains(&b) {
                pairs.push(OperandPair { a, b });
                pairs.push(OperandPair { a: b, b: a });
            }
        }
    }
    pairs
}

/// Seeded generator of random normal operands.
pub struct StimulusGenerator {
    params: FormatParams,
    rng: StdRng,
    min_exponent: u32,
    max_exponent: u32,
}

impl StimulusGenerator {
    /// Creates a generator drawing biased exponents from the inclusive
    /// range `[min_exponent, max_exponent]`, clamped to the format's
    /// normal range.
    pub fn new(params: FormatParams, seed: u64, min_exponent: u32, max_exponent: u32) -> Self {
        let max_normal = params.exp_all_ones() - 1;
        let max_exponent = max_exponent.clamp(1, max_normal);
        let min_exponent = min_exponent.clamp(1, max_exponent);
        StimulusGenerator {
            params,
            rng: StdRng::seed_from_u64(seed),
            min_exponent,
            max_exponent,
        }
    }

    /// Draws one random normal value: random sign, a biased exponent in
    /// the configured range, and a uniform mantissa.
    pub fn random_normal(&mut self) -> u64 {
        let sign = self.rng.random_range(0..=1u64);
        let exp = self.rng.random_range(self.min_exponent..=self.max_exponent) as u64;
        let mant = self.rng.random_range(0..=self.params.mantissa_mask());
        (sign << (self.params.total_width - 1)) | (exp << self.params.mantissa_width) | mant
    }

    /// Draws one random operand pair.
    pub fn random_pair(&mut self) -> OperandPair {
        OperandPair {
            a: self.random_normal(),
            b: self.random_normal(),
        }
    }

    /// Draws `count` random operand pairs.
    pub fn random_pairs(&mut self, count: usize) -> Vec<OperandPair> {
        (0..count).map(|_| self.random_pair()).collect()
    }
}
