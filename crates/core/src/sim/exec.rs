//! Execution-unit latency model.
//!
//! The scheduler's collaborators consume an issue bundle and answer with
//! (destination, completed) pairs after an operation-dependent latency: one
//! cycle for simple arithmetic, several cycles for multiplies and loads.
//! Each accepted operation occupies one unit, modeled as a countdown timer.

use crate::config::LatencyConfig;
use crate::core::pipeline::latches::CompletionReport;
use crate::core::pipeline::window::SlotOp;

/// Operation code for simple arithmetic.
pub const OP_ALU: u32 = 0;
/// Operation code for multiply.
pub const OP_MUL: u32 = 1;
/// Operation code for load.
pub const OP_LOAD: u32 = 2;

/// Operation classes recognized by the execution model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpClass {
    /// Simple arithmetic, single-cycle.
    Alu,
    /// Multiply, multi-cycle.
    Mul,
    /// Load, multi-cycle.
    Load,
}

impl OpClass {
    /// Decodes the class from an opaque operation code. The low two bits
    /// select the class; every other encoding is simple arithmetic.
    pub fn from_op(op: u32) -> Self {
        match op & 0x3 {
            1 => Self::Mul,
            2 => Self::Load,
            _ => Self::Alu,
        }
    }

    /// Unit occupancy in cycles for this class.
    pub fn latency(self, latency: &LatencyConfig) -> u64 {
        match self {
            Self::Alu => latency.alu,
            Self::Mul => latency.mul,
            Self::Load => latency.load,
        }
    }
}

/// One operation in flight inside an execution unit.
#[derive(Clone, Copy, Debug)]
struct InFlight {
    dest: u8,
    remaining: u64,
}

/// Bank of execution units modeled as countdown timers.
#[derive(Clone, Debug)]
pub struct ExecutionUnits {
    in_flight: Vec<InFlight>,
    latency: LatencyConfig,
}

impl ExecutionUnits {
    /// Creates an idle bank with the given latency table.
    pub fn new(latency: LatencyConfig) -> Self {
        Self {
            in_flight: Vec::new(),
            latency,
        }
    }

    /// Accepts one issued operation. Latencies below one cycle are clamped
    /// to one.
    pub fn accept(&mut self, op: &SlotOp) {
        let cycles = OpClass::from_op(op.op).latency(&self.latency).max(1);
        self.in_flight.push(InFlight {
            dest: op.dest,
            remaining: cycles,
        });
    }

    /// Advances every unit by one cycle, returning the writes that land.
    pub fn tick(&mut self) -> Vec<CompletionReport> {
        let mut finished = Vec::new();
        self.in_flight.retain_mut(|unit| {
            unit.remaining -= 1;
            if unit.remaining == 0 {
                finished.push(CompletionReport {
                    dest: unit.dest,
                    completed: true,
                });
                false
            } else {
                true
            }
        });
        finished
    }

    /// Number of operations currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// True when no operation is outstanding.
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }
}
