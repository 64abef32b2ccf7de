//! Adder core.
//!
//! Magnitude-compares the two unpacked operands, aligns the smaller
//! significand with sticky-fold shifting, adds or subtracts, renormalizes,
//! rounds through the GRS rounder, and packs the final bit pattern.
//! Special values bypass the numeric path entirely.

use crate::common::format::FormatParams;
use crate::core::round::{round_significand, shift_right_sticky, RoundingMode};
use crate::core::unpack::unpack;

/// Adds two bit patterns of the configured format.
///
/// Special-case table, checked before any numeric work:
///
/// | condition                          | result                  |
/// |------------------------------------|-------------------------|
/// | either operand NaN, or inf - inf   | canonical quiet NaN     |
/// | a infinite                         | a unchanged             |
/// | b infinite                         | b unchanged             |
/// | both zero                          | -0 only when both -0    |
/// | a zero                             | b unchanged             |
/// | b zero                             | a unchanged             |
///
/// The numeric path aligns on effective exponents, resolves equal aligned
/// significands in favor of `a`, and flushes underflowing results to a
/// signed zero (no denormal result is produced).
///
/// # Arguments
///
/// * `a_bits` - First operand bit pattern.
/// * `b_bits` - Second operand bit pattern.
/// * `mode` - Rounding mode for this operation.
/// * `params` - Format parameters fixed at configuration time.
///
/// # Returns
///
/// The result bit pattern in the same format.
pub fn add(a_bits: u64, b_bits: u64, mode: RoundingMode, params: &FormatParams) -> u64 {
    let a = unpack(a_bits, params);
    let b = unpack(b_bits, params);

    if a.is_nan() || b.is_nan() {
        return params.quiet_nan();
    }
    if a.is_inf() && b.is_inf() && a.sign != b.sign {
        return params.quiet_nan();
    }
    if a.is_inf() {
        return a_bits;
    }
    if b.is_inf() {
        return b_bits;
    }
    if a.is_zero() && b.is_zero() {
        return params.signed_zero(a.sign && b.sign);
    }
    if a.is_zero() {
        return b_bits;
    }
    if b.is_zero() {
        return a_bits;
    }

    let guard = params.guard_bits;
    // Implicit bit sits at align_width - 1 once normalized.
    let align_width = params.mantissa_width + 1 + guard;

    let mut mant_a = (a.significand(params) as u128) << guard;
    let mut mant_b = (b.significand(params) as u128) << guard;

    let exp_diff = a.effective_exponent() - b.effective_exponent();
    let mut res_exp = if exp_diff > 0 {
        mant_b = shift_right_sticky(mant_b, exp_diff as u32);
        a.effective_exponent()
    } else {
        mant_a = shift_right_sticky(mant_a, (-exp_diff) as u32);
        b.effective_exponent()
    };

    let subtract = a.sign != b.sign;
    let (mut res_mant, res_sign) = if subtract {
        // Equal aligned significands resolve to a's path; the difference
        // is zero either way, so only the cancellation sign is involved.
        if mant_a >= mant_b {
            (mant_a - mant_b, a.sign)
        } else {
            (mant_b - mant_a, b.sign)
        }
    } else {
        (mant_a + mant_b, a.sign)
    };

    if res_mant == 0 {
        // Exact cancellation: +0 in every mode except RNI.
        return params.signed_zero(mode == RoundingMode::Rni && subtract);
    }

    // Normalize so the implicit bit sits at align_width - 1. The shift is
    // signed: addition carry-out needs a right-normalize, which must also
    // preserve the sticky information it shifts out.
    let msb_pos = 127 - res_mant.leading_zeros() as i32;
    let shift = align_width as i32 - 1 - msb_pos;
    if shift > 0 {
        res_mant <<= shift as u32;
    } else if shift < 0 {
        res_mant = shift_right_sticky(res_mant, (-shift) as u32);
    }
    res_exp -= shift;

    // Round the mantissa (implicit bit excluded) down to mantissa_width
    // bits; a carry out of the increment bumps the exponent once more.
    let rounder_input = res_mant & ((1u128 << (align_width - 1)) - 1);
    let (final_mant, carry) =
        round_significand(rounder_input, res_sign, mode, guard, params.mantissa_width);
    if carry {
        res_exp += 1;
    }

    if res_exp >= params.exp_all_ones() as i32 {
        return params.signed_inf(res_sign);
    }
    if res_exp <= 0 {
        // Flush-to-zero underflow, the documented design default.
        return params.signed_zero(res_sign);
    }

    params.pack(res_sign, res_exp as u32, final_mant)
}
