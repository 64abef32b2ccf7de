//! Fixed-latency staged execution contract.
//!
//! Models a fully pipelined hardware unit: one operation is accepted per
//! discrete time step and its result is emitted exactly `latency` steps
//! later, preserving strict input order. In-flight operations live in a
//! fixed-size queue of depth `latency`; `reset` discards them without
//! flushing. A result not taken on its completing tick is dropped - pacing
//! the consumer belongs to the surrounding valid/ready layer, not to the
//! core.
//!
//! Every tick completes in bounded, operand-independent time: the numeric
//! result is computed at issue and only its delivery is staged.

use std::collections::VecDeque;

use crate::common::error::ConfigError;
use crate::common::format::FormatParams;
use crate::core::adder::add;
use crate::core::multiplier::multiply;
use crate::core::round::RoundingMode;

/// Default pipeline depth in ticks.
pub const DEFAULT_LATENCY: usize = 4;

/// Operation accepted by the staged pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpOp {
    /// Floating-point addition.
    Add,
    /// Floating-point multiplication.
    Mul,
}

/// One request issued to the pipeline.
#[derive(Clone, Copy, Debug)]
pub struct FpRequest {
    /// Operation to perform.
    pub op: FpOp,
    /// First operand bit pattern.
    pub a: u64,
    /// Second operand bit pattern.
    pub b: u64,
    /// Rounding mode for this operation.
    pub mode: RoundingMode,
}

/// An operation in flight, with the ticks remaining until delivery.
#[derive(Clone, Copy, Debug)]
struct InFlight {
    result: u64,
    remaining: usize,
}

/// Staged floating-point pipeline with deterministic latency.
#[derive(Clone, Debug)]
pub struct FpPipeline {
    params: FormatParams,
    latency: usize,
    slots: VecDeque<InFlight>,
}

impl FpPipeline {
    /// Creates a pipeline for the given format.
    ///
    /// # Arguments
    ///
    /// * `params` - Format parameters fixed at construction.
    /// * `latency` - Pipeline depth in ticks; must be at least 1.
    pub fn new(params: FormatParams, latency: usize) -> Result<Self, ConfigError> {
        if latency == 0 {
            return Err(ConfigError::InvalidLatency(latency));
        }
        Ok(FpPipeline {
            params,
            latency,
            slots: VecDeque::with_capacity(latency),
        })
    }

    /// Creates a pipeline with the default latency of 4 ticks.
    pub fn with_default_latency(params: FormatParams) -> Self {
        FpPipeline {
            params,
            latency: DEFAULT_LATENCY,
            slots: VecDeque::with_capacity(DEFAULT_LATENCY),
        }
    }

    /// Pipeline depth in ticks.
    pub fn latency(&self) -> usize {
        self.latency
    }

    /// Number of operations currently in flight.
    pub fn in_flight(&self) -> usize {
        self.slots.len()
    }

    /// Advances one time step.
    ///
    /// Ages every in-flight operation, delivers the one whose latency
    /// elapsed on this tick (if any), then accepts the new request. An
    /// operation issued on tick `t` is returned by the call on tick
    /// `t + latency`.
    ///
    /// # Returns
    ///
    /// The completing result bit pattern, or `None` when no operation
    /// completes on this tick.
    pub fn tick(&mut self, request: Option<FpRequest>) -> Option<u64> {
        for entry in self.slots.iter_mut() {
            entry.remaining -= 1;
        }

        let completed = match self.slots.front() {
            Some(entry) if entry.remaining == 0 => {
                self.slots.pop_front().map(|entry| entry.result)
            }
            _ => None,
        };

        if let Some(req) = request {
            let result = match req.op {
                FpOp::Add => add(req.a, req.b, req.mode, &self.params),
                FpOp::Mul => multiply(req.a, req.b, req.mode, &self.params),
            };
            self.slots.push_back(InFlight {
                result,
                remaining: self.latency,
            });
        }

        completed
    }

    /// Discards all in-flight state. In-flight results are lost, not
    /// flushed; individual operations cannot be cancelled.
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}
