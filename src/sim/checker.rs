//! Result checking against a native floating-point reference.
//!
//! Computes an independent reference value for each operation and
//! scoreboards the engine's output against it. Both sides are
//! canonicalized (every NaN to the canonical quiet NaN, negative zero to
//! positive zero) before comparison, so NaN payloads and zero signs never
//! produce spurious mismatches.
//!
//! The reference mirrors the design's documented conventions: underflow
//! flushes to a signed zero and exponent overflow saturates to infinity.
//! Where the host cannot model a case faithfully (non-RNE modes through
//! native arithmetic), the check is skipped rather than guessed.

use crate::common::format::FormatParams;
use crate::core::pipeline::FpOp;
use crate::core::round::{round_significand, shift_right_sticky, RoundingMode};
use crate::core::unpack::{unpack, Category};

/// Verdict of one scoreboard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Engine and reference agree after canonicalization.
    Pass,
    /// Engine and reference disagree.
    Fail,
    /// The reference cannot model this case; nothing was compared.
    Skip,
}

/// One recorded disagreement between engine and reference.
#[derive(Clone, Copy, Debug)]
pub struct Mismatch {
    pub op: FpOp,
    pub a: u64,
    pub b: u64,
    pub mode: RoundingMode,
    pub got: u64,
    pub expected: u64,
}

/// Canonicalizes special values to prevent spurious mismatches: every NaN
/// becomes the canonical quiet NaN and negative zero becomes positive
/// zero.
pub fn canonicalize(bits: u64, params: &FormatParams) -> u64 {
    let op = unpack(bits, params);
    if op.is_nan() {
        return params.quiet_nan();
    }
    if bits == params.neg_zero() {
        return params.pos_zero();
    }
    bits
}

/// Promotes a bit pattern of any supported width to an `f64` value.
///
/// Exact for every finite input: the widest significand (53 bits with the
/// implicit bit) and exponent range both fit inside binary64.
pub fn promote(bits: u64, params: &FormatParams) -> f64 {
    match params.total_width {
        64 => f64::from_bits(bits),
        32 => f32::from_bits(bits as u32) as f64,
        _ => {
            let op = unpack(bits, params);
            match op.category {
                Category::Zero => {
                    if op.sign {
                        -0.0
                    } else {
                        0.0
                    }
                }
                Category::Infinity => {
                    if op.sign {
                        f64::NEG_INFINITY
                    } else {
                        f64::INFINITY
                    }
                }
                Category::QuietNan | Category::SignalingNan => f64::NAN,
                _ => {
                    let sig = op.significand(params) as f64;
                    let e =
                        op.effective_exponent() - params.bias - params.mantissa_width as i32;
                    let v = sig * 2f64.powi(e);
                    if op.sign {
                        -v
                    } else {
                        v
                    }
                }
            }
        }
    }
}

/// Demotes an exact `f64` intermediate to a narrower target format with a
/// single bit-accurate rounding, honoring the design's flush-to-zero and
/// overflow-to-infinity conventions.
fn demote(value: f64, params: &FormatParams, mode: RoundingMode) -> u64 {
    let bits = value.to_bits();
    let sign = bits >> 63 != 0;
    let exp64 = ((bits >> 52) & 0x7FF) as i32;
    let mant64 = bits & ((1u64 << 52) - 1);

    if exp64 == 0x7FF {
        if mant64 != 0 {
            return params.quiet_nan();
        }
        return params.signed_inf(sign);
    }
    if exp64 == 0 {
        // Zero, or a binary64 denormal far below the narrow format's
        // underflow threshold.
        return params.signed_zero(sign);
    }

    let shift_to_lsb = 52 - params.mantissa_width;
    let target_exp = exp64 - 1023 + params.bias;

    if target_exp >= params.exp_all_ones() as i32 {
        return params.signed_inf(sign);
    }
    if target_exp <= 0 {
        // Underflow flushes, except that a round-up carry out of the
        // shifted significand lands exactly on the smallest normal.
        let full = (mant64 | (1u64 << 52)) as u128;
        let shifted = shift_right_sticky(full, (1 - target_exp) as u32);
        let (_, carry) = round_significand(shifted, sign, mode, shift_to_lsb, params.mantissa_width);
        if carry {
            return params.pack(sign, 1, 0);
        }
        return params.signed_zero(sign);
    }

    let (mant, carry) =
        round_significand(mant64 as u128, sign, mode, shift_to_lsb, params.mantissa_width);
    let mut exp = target_exp;
    if carry {
        exp += 1;
    }
    if exp >= params.exp_all_ones() as i32 {
        return params.signed_inf(sign);
    }
    params.pack(sign, exp as u32, mant)
}

/// Applies the design's result conventions to a native host result:
/// canonical quiet NaN and denormal flush to a signed zero.
fn normalize_native(bits: u64, params: &FormatParams) -> u64 {
    let op = unpack(bits, params);
    if op.is_nan() {
        return params.quiet_nan();
    }
    if op.category == Category::Denormal {
        return params.signed_zero(op.sign);
    }
    bits
}

/// Computes the reference result for an addition.
///
/// Binary16 sums are formed exactly in `f64` and demoted with one
/// bit-accurate rounding, so all five modes are covered. Binary32 and
/// binary64 use the host's native arithmetic and therefore cover RNE only.
///
/// # Returns
///
/// The reference bit pattern, or `None` when the case cannot be modeled.
pub fn reference_add(
    a_bits: u64,
    b_bits: u64,
    mode: RoundingMode,
    params: &FormatParams,
) -> Option<u64> {
    let a = unpack(a_bits, params);
    let b = unpack(b_bits, params);

    // Special-value algebra per IEEE 754.
    if a.is_nan() || b.is_nan() {
        return Some(params.quiet_nan());
    }
    if a.is_inf() && b.is_inf() && a.sign != b.sign {
        return Some(params.quiet_nan());
    }
    if a.is_inf() {
        return Some(a_bits);
    }
    if b.is_inf() {
        return Some(b_bits);
    }
    if a.is_zero() && b.is_zero() {
        return Some(params.signed_zero(a.sign && b.sign));
    }
    if a.is_zero() {
        return Some(b_bits);
    }
    if b.is_zero() {
        return Some(a_bits);
    }

    match params.total_width {
        16 => {
            // Exact: aligned binary16 significands span at most 41 bits.
            let sum = promote(a_bits, params) + promote(b_bits, params);
            if sum == 0.0 {
                // Exact cancellation of nonzero operands: +0 except RNI.
                return Some(params.signed_zero(mode == RoundingMode::Rni));
            }
            Some(demote(sum, params, mode))
        }
        32 => {
            if mode != RoundingMode::Rne {
                return None;
            }
            let sum = f32::from_bits(a_bits as u32) + f32::from_bits(b_bits as u32);
            Some(normalize_native(sum.to_bits() as u64, params))
        }
        _ => {
            if mode != RoundingMode::Rne {
                return None;
            }
            let sum = f64::from_bits(a_bits) + f64::from_bits(b_bits);
            Some(normalize_native(sum.to_bits(), params))
        }
    }
}

/// Computes the reference result for a multiplication.
///
/// Binary16 and binary32 products are formed exactly in `f64` and demoted
/// with one bit-accurate rounding, covering all five modes; binary64 uses
/// native arithmetic and covers RNE only.
///
/// # Returns
///
/// The reference bit pattern, or `None` when the case cannot be modeled.
pub fn reference_mul(
    a_bits: u64,
    b_bits: u64,
    mode: RoundingMode,
    params: &FormatParams,
) -> Option<u64> {
    let a = unpack(a_bits, params);
    let b = unpack(b_bits, params);

    if a.is_nan() || b.is_nan() {
        return Some(params.quiet_nan());
    }
    if (a.is_inf() && b.is_zero()) || (a.is_zero() && b.is_inf()) {
        return Some(params.quiet_nan());
    }
    let sign = a.sign ^ b.sign;
    if a.is_inf() || b.is_inf() {
        return Some(params.signed_inf(sign));
    }
    if a.is_zero() || b.is_zero() {
        return Some(params.signed_zero(sign));
    }

    match params.total_width {
        16 | 32 => {
            // Exact: the double-width product fits binary64's significand.
            let product = promote(a_bits, params) * promote(b_bits, params);
            Some(demote(product, params, mode))
        }
        _ => {
            if mode != RoundingMode::Rne {
                return None;
            }
            let product = f64::from_bits(a_bits) * f64::from_bits(b_bits);
            Some(normalize_native(product.to_bits(), params))
        }
    }
}

/// Scoreboard comparing engine output against the reference.
pub struct Scoreboard {
    params: FormatParams,
    /// Recorded disagreements, in check order.
    pub mismatches: Vec<Mismatch>,
}

impl Scoreboard {
    /// Creates a scoreboard for the given format.
    pub fn new(params: FormatParams) -> Self {
        Scoreboard {
            params,
            mismatches: Vec::new(),
        }
    }

    fn check(
        &mut self,
        op: FpOp,
        a: u64,
        b: u64,
        mode: RoundingMode,
        got: u64,
        expected: Option<u64>,
    ) -> Verdict {
        let expected = match expected {
            Some(e) => e,
            None => return Verdict::Skip,
        };
        if canonicalize(got, &self.params) == canonicalize(expected, &self.params) {
            Verdict::Pass
        } else {
            self.mismatches.push(Mismatch {
                op,
                a,
                b,
                mode,
                got,
                expected,
            });
            Verdict::Fail
        }
    }

    /// Checks one addition result.
    pub fn check_add(&mut self, a: u64, b: u64, mode: RoundingMode, got: u64) -> Verdict {
        let expected = reference_add(a, b, mode, &self.params);
        self.check(FpOp::Add, a, b, mode, got, expected)
    }

    /// Checks one multiplication result.
    pub fn check_mul(&mut self, a: u64, b: u64, mode: RoundingMode, got: u64) -> Verdict {
        let expected = reference_mul(a, b, mode, &self.params);
        self.check(FpOp::Mul, a, b, mode, got, expected)
    }
}
