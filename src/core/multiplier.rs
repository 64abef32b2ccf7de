//! Multiplier core.
//!
//! Computes the result sign as the XOR of the input signs, the candidate
//! exponent as the sum of effective exponents minus the bias, and the
//! significand as a double-width product, then normalizes (one bit right
//! for a [2,4) product, left for the short significand of a denormal
//! operand) and rounds. Special values bypass the numeric path.

use crate::common::format::FormatParams;
use crate::core::round::{round_significand, shift_right_sticky, RoundingMode};
use crate::core::unpack::unpack;

/// Multiplies two bit patterns of the configured format.
///
/// Special cases, checked before any numeric work: a NaN operand is
/// propagated with its quiet bit forced set; infinity times zero is the
/// canonical quiet NaN; a remaining infinity gives a signed infinity and a
/// remaining zero a signed zero, both with the XOR sign.
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
pub fn multiply(a_bits: u64, b_bits: u64, mode: RoundingMode, params: &FormatParams) -> u64 {
    let a = unpack(a_bits, params);
    let b = unpack(b_bits, params);

    if a.is_nan() {
        return a_bits | params.quiet_bit();
    }
    if b.is_nan() {
        return b_bits | params.quiet_bit();
    }
    if (a.is_inf() && b.is_zero()) || (a.is_zero() && b.is_inf()) {
        return params.quiet_nan();
    }

    let res_sign = a.sign ^ b.sign;
    if a.is_inf() || b.is_inf() {
        return params.signed_inf(res_sign);
    }
    if a.is_zero() || b.is_zero() {
        return params.signed_zero(res_sign);
    }

    let mant_w = params.mantissa_width;
    let mut res_exp = a.effective_exponent() + b.effective_exponent() - params.bias;
    let mut product = (a.significand(params) as u128) * (b.significand(params) as u128);

    // Product of two [1,2) significands lies in [1,4): a set top bit means
    // [2,4), needing a one-bit right shift and an exponent bump. The
    // normalized implicit-bit position is 2 * mant_w. A denormal operand
    // has no implicit bit, so its product can land well below [1,2);
    // left-normalize it up to the implicit position, which can recover a
    // normal-range result.
    if product >> (2 * mant_w + 1) & 1 != 0 {
        product = shift_right_sticky(product, 1);
        res_exp += 1;
    } else {
        let msb_pos = 127 - product.leading_zeros() as i32;
        let shift = 2 * mant_w as i32 - msb_pos;
        if shift > 0 {
            product <<= shift as u32;
            res_exp -= shift;
        }
    }

    if res_exp <= 0 {
        // Underflow: pre-shift so a round-up carry lands exactly on the
        // smallest normal.
        product = shift_right_sticky(product, (1 - res_exp) as u32);
        res_exp = 0;
    }

    let rounder_input = product & ((1u128 << (2 * mant_w)) - 1);
    let (final_mant, carry) = round_significand(rounder_input, res_sign, mode, mant_w, mant_w);
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
