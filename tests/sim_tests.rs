//! Unit tests for stimulus generation, the checker, and the compare flow.

use fp_engine::common::format::FormatParams;
use fp_engine::config::Config;
use fp_engine::core::round::RoundingMode;
use fp_engine::core::unpack::classify;
use fp_engine::core::{add, multiply};
use fp_engine::sim::{
    canonicalize, directed_pairs, reference_add, reference_mul, run_compare, special_values,
    Scoreboard, StimulusGenerator, Verdict,
};

fn p16() -> FormatParams {
    FormatParams::with_default_guard(16).unwrap()
}

/// Tests the directed special-value set.
#[test]
fn test_special_values() {
    let p = p16();
    let specials = special_values(&p);
    assert_eq!(specials.len(), 8);
    assert!(specials.contains(&0x0000));
    assert!(specials.contains(&0x8000));
    assert!(specials.contains(&0x7C00));
    assert!(specials.contains(&0xFC00));
    for &v in &specials {
        assert_eq!(classify(v, &p).count_set(), 1);
    }
}

/// Tests that every directed pair involves at least one special value.
#[test]
fn test_directed_pairs_cover_specials() {
    let p = p16();
    let specials = special_values(&p);
    let pairs = directed_pairs(&p);
    assert!(!pairs.is_empty());
    for pair in &pairs {
        assert!(
            specials.contains(&pair.a) || specials.contains(&pair.b),
            "pair {:#06x} {:#06x}",
            pair.a,
            pair.b
        );
    }
}

/// Tests that the random generator is deterministic per seed and honors
/// the exponent range.
#[test]
fn test_stimulus_determinism_and_range() {
    let p = p16();
    let pairs_a = StimulusGenerator::new(p, 7, 5, 20).random_pairs(50);
    let pairs_b = StimulusGenerator::new(p, 7, 5, 20).random_pairs(50);
    assert_eq!(pairs_a, pairs_b);

    let pairs_c = StimulusGenerator::new(p, 8, 5, 20).random_pairs(50);
    assert_ne!(pairs_a, pairs_c);

    for pair in &pairs_a {
        for bits in [pair.a, pair.b] {
            let exp = (bits >> 10) & 0x1F;
            assert!((5..=20).contains(&exp), "bits {:#06x}", bits);
        }
    }
}

/// Tests NaN and signed-zero canonicalization.
#[test]
fn test_canonicalize() {
    let p = p16();
    assert_eq!(canonicalize(0x7E00, &p), 0x7E00);
    assert_eq!(canonicalize(0xFE33, &p), 0x7E00);
    assert_eq!(canonicalize(0x7C01, &p), 0x7E00);
    assert_eq!(canonicalize(0x8000, &p), 0x0000);
    assert_eq!(canonicalize(0xBC00, &p), 0xBC00);
}

/// Tests the reference adder against directed engine results.
#[test]
fn test_reference_add_agrees() {
    let p = p16();
    let cases = [
        (0x3C00u64, 0x3C00u64),
        (0x3C00, 0x1000),
        (0x4000, 0xBC00),
        (0x7BFF, 0x7BFF),
        (0x0400, 0x8001),
        (0x7C00, 0xFC00),
    ];
    for &(a, b) in &cases {
        for mode in RoundingMode::all() {
            let expected = reference_add(a, b, mode, &p).unwrap();
            let got = add(a, b, mode, &p);
            assert_eq!(
                canonicalize(got, &p),
                canonicalize(expected, &p),
                "a={:#06x} b={:#06x} {}",
                a,
                b,
                mode.name()
            );
        }
    }
}

/// Tests the reference multiplier against the engine on denormal
/// operands, including products that reach the normal range.
#[test]
fn test_reference_mul_denormal_operands() {
    let p = p16();
    assert_eq!(
        reference_mul(0x0001, 0x6400, RoundingMode::Rne, &p),
        Some(0x0400)
    );
    let cases = [(0x03FFu64, 0x4000u64), (0x0001, 0x0001), (0x8001, 0x6400)];
    for &(a, b) in &cases {
        for mode in RoundingMode::all() {
            let got = multiply(a, b, mode, &p);
            assert_eq!(
                reference_mul(a, b, mode, &p),
                Some(got),
                "a={:#06x} b={:#06x} {}",
                a,
                b,
                mode.name()
            );
        }
    }
}

/// Tests scoreboard verdicts and mismatch recording.
#[test]
fn test_scoreboard_verdicts() {
    let p = p16();
    let mut sb = Scoreboard::new(p);

    let got = multiply(0xC000, 0x4000, RoundingMode::Rne, &p);
    assert_eq!(sb.check_mul(0xC000, 0x4000, RoundingMode::Rne, got), Verdict::Pass);

    assert_eq!(
        sb.check_mul(0x0001, 0x3C00, RoundingMode::Rne, 0x0000),
        Verdict::Skip
    );

    // A deliberately wrong result is recorded.
    assert_eq!(
        sb.check_add(0x3C00, 0x3C00, RoundingMode::Rne, 0x4001),
        Verdict::Fail
    );
    assert_eq!(sb.mismatches.len(), 1);
    assert_eq!(sb.mismatches[0].got, 0x4001);
    assert_eq!(sb.mismatches[0].expected, 0x4000);
}

/// Tests the full binary16 compare flow: engine and reference agree on
/// every directed and random case in every mode.
#[test]
fn test_compare_flow_16() {
    let mut config = Config::default();
    config.stimulus.count = 200;
    let report = run_compare(&config).unwrap();
    assert_eq!(report.total_failed(), 0, "{:?}", report.mismatches.first());
    assert_eq!(report.modes.len(), 5);
    for m in &report.modes {
        assert!(m.add_passed > 0);
        assert!(m.mul_passed > 0);
    }
}

/// Tests the binary32 compare flow.
#[test]
fn test_compare_flow_32() {
    let mut config = Config::default();
    config.engine.width = 32;
    config.stimulus.count = 200;
    let report = run_compare(&config).unwrap();
    assert_eq!(report.total_failed(), 0, "{:?}", report.mismatches.first());
}

/// Tests the binary64 compare flow.
#[test]
fn test_compare_flow_64() {
    let mut config = Config::default();
    config.engine.width = 64;
    config.stimulus.count = 100;
    let report = run_compare(&config).unwrap();
    assert_eq!(report.total_failed(), 0, "{:?}", report.mismatches.first());
}
