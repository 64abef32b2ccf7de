//! Unit tests for the staged pipeline contract.

use fp_engine::common::format::FormatParams;
use fp_engine::core::pipeline::{FpOp, FpPipeline, FpRequest, DEFAULT_LATENCY};
use fp_engine::core::round::RoundingMode;

fn p16() -> FormatParams {
    FormatParams::with_default_guard(16).unwrap()
}

fn add_req(a: u64, b: u64) -> FpRequest {
    FpRequest {
        op: FpOp::Add,
        a,
        b,
        mode: RoundingMode::Rne,
    }
}

fn mul_req(a: u64, b: u64) -> FpRequest {
    FpRequest {
        op: FpOp::Mul,
        a,
        b,
        mode: RoundingMode::Rne,
    }
}

/// Tests that a zero latency is rejected.
#[test]
fn test_zero_latency_rejected() {
    assert!(FpPipeline::new(p16(), 0).is_err());
    assert!(FpPipeline::new(p16(), 1).is_ok());
}

/// Tests that a result appears exactly `latency` ticks after issue.
#[test]
fn test_latency_exact() {
    let mut pipe = FpPipeline::new(p16(), 4).unwrap();
    assert_eq!(pipe.tick(Some(add_req(0x3C00, 0x3C00))), None);
    assert_eq!(pipe.tick(None), None);
    assert_eq!(pipe.tick(None), None);
    assert_eq!(pipe.tick(None), None);
    assert_eq!(pipe.tick(None), Some(0x4000));
    assert_eq!(pipe.tick(None), None);
}

/// Tests the default pipeline depth.
#[test]
fn test_default_latency() {
    let pipe = FpPipeline::with_default_latency(p16());
    assert_eq!(pipe.latency(), DEFAULT_LATENCY);
    assert_eq!(DEFAULT_LATENCY, 4);
}

/// Tests single-tick latency.
#[test]
fn test_latency_one() {
    let mut pipe = FpPipeline::new(p16(), 1).unwrap();
    assert_eq!(pipe.tick(Some(mul_req(0xC000, 0x4000))), None);
    assert_eq!(pipe.tick(None), Some(0xC400));
}

/// Tests that back-to-back issues complete in order, one per tick.
#[test]
fn test_full_throughput_order() {
    let mut pipe = FpPipeline::new(p16(), 2).unwrap();
    assert_eq!(pipe.tick(Some(add_req(0x3C00, 0x3C00))), None);
    assert_eq!(pipe.tick(Some(mul_req(0xC000, 0x4000))), None);
    assert_eq!(pipe.tick(Some(add_req(0x3C00, 0x4000))), Some(0x4000));
    assert_eq!(pipe.tick(None), Some(0xC400));
    assert_eq!(pipe.tick(None), Some(0x4200));
    assert_eq!(pipe.tick(None), None);
}

/// Tests the in-flight occupancy count.
#[test]
fn test_in_flight() {
    let mut pipe = FpPipeline::new(p16(), 3).unwrap();
    assert_eq!(pipe.in_flight(), 0);
    pipe.tick(Some(add_req(0x3C00, 0x3C00)));
    pipe.tick(Some(add_req(0x4000, 0x4000)));
    assert_eq!(pipe.in_flight(), 2);
    pipe.tick(None);
    assert_eq!(pipe.in_flight(), 2);
    assert!(pipe.tick(None).is_some());
    assert_eq!(pipe.in_flight(), 1);
    assert!(pipe.tick(None).is_some());
    assert_eq!(pipe.in_flight(), 0);
}

/// Tests that reset discards in-flight operations without delivery.
#[test]
fn test_reset_discards() {
    let mut pipe = FpPipeline::new(p16(), 4).unwrap();
    pipe.tick(Some(add_req(0x3C00, 0x3C00)));
    pipe.tick(Some(mul_req(0x3C00, 0x3C00)));
    pipe.reset();
    assert_eq!(pipe.in_flight(), 0);
    for _ in 0..8 {
        assert_eq!(pipe.tick(None), None);
    }
}

/// Tests that operations issued after a reset complete normally.
#[test]
fn test_reset_then_reissue() {
    let mut pipe = FpPipeline::new(p16(), 2).unwrap();
    pipe.tick(Some(add_req(0x3C00, 0x3C00)));
    pipe.reset();
    assert_eq!(pipe.tick(Some(add_req(0x3C00, 0x4000))), None);
    assert_eq!(pipe.tick(None), None);
    assert_eq!(pipe.tick(None), Some(0x4200));
}
