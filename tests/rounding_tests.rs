//! Unit tests for rounding modes and the GRS rounder.

use fp_engine::core::round::{
    round_increment, round_significand, shift_right_sticky, RoundingMode,
};

/// Tests the 3-bit wire encoding round trip.
#[test]
fn test_wire_encoding() {
    for mode in RoundingMode::all() {
        assert_eq!(RoundingMode::from_bits(mode.to_bits()).unwrap(), mode);
    }
    assert_eq!(RoundingMode::Rne.to_bits(), 0b000);
    assert_eq!(RoundingMode::Rna.to_bits(), 0b100);
    assert!(RoundingMode::from_bits(0b101).is_err());
    assert!(RoundingMode::from_bits(0b111).is_err());
}

/// Tests mode name parsing and printing.
#[test]
fn test_mode_names() {
    for mode in RoundingMode::all() {
        assert_eq!(RoundingMode::from_name(mode.name()).unwrap(), mode);
    }
    assert!(RoundingMode::from_name("nearest").is_err());
    assert_eq!(RoundingMode::default(), RoundingMode::Rne);
}

/// Tests that shifted-out bits fold into the result LSB.
#[test]
fn test_shift_right_sticky() {
    assert_eq!(shift_right_sticky(0b11000, 2), 0b110);
    assert_eq!(shift_right_sticky(0b11001, 2), 0b111);
    assert_eq!(shift_right_sticky(0b11010, 2), 0b111);
    assert_eq!(shift_right_sticky(0b11000, 0), 0b11000);
}

/// Tests sticky shifts at and beyond the datapath width.
#[test]
fn test_shift_right_sticky_saturating() {
    assert_eq!(shift_right_sticky(5, 200), 1);
    assert_eq!(shift_right_sticky(0, 200), 0);
    assert_eq!(shift_right_sticky(1u128 << 127, 127), 1);
    assert_eq!(shift_right_sticky(u128::MAX, 128), 1);
}

/// Tests the round-to-nearest-even increment decision.
#[test]
fn test_increment_rne() {
    // Tie with odd LSB rounds up; tie with even LSB rounds down.
    assert!(round_increment((0b1 << 3) | 0b100, false, RoundingMode::Rne, 3));
    assert!(!round_increment((0b10 << 3) | 0b100, false, RoundingMode::Rne, 3));
    // Above the tie always rounds up, below never does.
    assert!(round_increment((0b10 << 3) | 0b101, false, RoundingMode::Rne, 3));
    assert!(!round_increment((0b10 << 3) | 0b011, false, RoundingMode::Rne, 3));
}

/// Tests the directed-mode increment decisions.
#[test]
fn test_increment_directed() {
    // RTZ never increments.
    assert!(!round_increment((0b1 << 3) | 0b111, false, RoundingMode::Rtz, 3));
    assert!(!round_increment((0b1 << 3) | 0b111, true, RoundingMode::Rtz, 3));
    // RPI increments positive inexact values only.
    assert!(round_increment((0b1 << 3) | 0b001, false, RoundingMode::Rpi, 3));
    assert!(!round_increment((0b1 << 3) | 0b001, true, RoundingMode::Rpi, 3));
    assert!(!round_increment(0b1 << 3, false, RoundingMode::Rpi, 3));
    // RNI increments negative inexact values only.
    assert!(round_increment((0b1 << 3) | 0b001, true, RoundingMode::Rni, 3));
    assert!(!round_increment((0b1 << 3) | 0b001, false, RoundingMode::Rni, 3));
}

/// Tests that RNA breaks ties away from zero regardless of LSB parity.
#[test]
fn test_increment_rna() {
    assert!(round_increment((0b10 << 3) | 0b100, false, RoundingMode::Rna, 3));
    assert!(round_increment((0b10 << 3) | 0b100, true, RoundingMode::Rna, 3));
    assert!(!round_increment((0b10 << 3) | 0b011, false, RoundingMode::Rna, 3));
}

/// Tests rounding with nothing to discard.
#[test]
fn test_round_zero_shift() {
    assert!(!round_increment(0b111, false, RoundingMode::Rpi, 0));
    assert_eq!(round_significand(5, false, RoundingMode::Rpi, 0, 10), (5, false));
}

/// Tests the full rounder's kept value and carry reporting.
#[test]
fn test_round_significand() {
    // Tie with odd LSB increments.
    assert_eq!(
        round_significand((0b101 << 3) | 0b100, false, RoundingMode::Rne, 3, 10),
        (0b110, false)
    );
    // Truncation keeps the value unchanged.
    assert_eq!(
        round_significand((0b101 << 3) | 0b111, false, RoundingMode::Rtz, 3, 10),
        (0b101, false)
    );
}

/// Tests that an all-ones mantissa rolls over to all-zeros with carry.
#[test]
fn test_round_overflow_carry() {
    let all_ones = 0x3FFu128;
    assert_eq!(
        round_significand((all_ones << 3) | 0b100, false, RoundingMode::Rna, 3, 10),
        (0, true)
    );
    assert_eq!(
        round_significand((all_ones << 3) | 0b100, true, RoundingMode::Rni, 3, 10),
        (0, true)
    );
}
