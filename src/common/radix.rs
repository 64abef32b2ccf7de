//! Radix-tagged bit-pattern parsing and rendering.
//!
//! Operands arrive as text in any of four radices, detected by prefix
//! (`0x`, `0b`, `0o`, otherwise decimal, case-insensitive); the detected
//! radix is kept alongside the value so results can be rendered back the
//! same way.

use crate::common::format::FormatParams;

/// The radix a bit pattern was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Hex,
    Bin,
    Oct,
    Dec,
}

/// Parses a bit pattern, detecting the radix from its prefix. Underscores
/// between digits are ignored.
///
/// # Returns
///
/// The value and its detected radix, or a description of the rejected
/// input (bad digits, or a value wider than the format).
pub fn parse_pattern(text: &str, params: &FormatParams) -> Result<(u64, Radix), String> {
    let (digits, radix, base) = match text.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => (&text[2..], Radix::Hex, 16),
        Some(prefix) if prefix.eq_ignore_ascii_case("0b") => (&text[2..], Radix::Bin, 2),
        Some(prefix) if prefix.eq_ignore_ascii_case("0o") => (&text[2..], Radix::Oct, 8),
        _ => (text, Radix::Dec, 10),
    };

    let value = u64::from_str_radix(&digits.replace('_', ""), base)
        .map_err(|e| format!("invalid operand '{}': {}", text, e))?;
    if value & !params.value_mask() != 0 {
        return Err(format!(
            "operand '{}' does not fit in {} bits",
            text, params.total_width
        ));
    }
    Ok((value, radix))
}

/// Renders a bit pattern in the given radix, zero-padded to the format
/// width for hex and binary.
pub fn render_pattern(bits: u64, radix: Radix, params: &FormatParams) -> String {
    let w = params.total_width as usize;
    match radix {
        Radix::Hex => format!("0x{:0width$x}", bits, width = w / 4),
        Radix::Bin => format!("0b{:0width$b}", bits, width = w),
        Radix::Oct => format!("0o{:o}", bits),
        Radix::Dec => format!("{}", bits),
    }
}
