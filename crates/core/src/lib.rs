//! Cycle-accurate behavioral model of a two-stage out-of-order instruction
//! scheduler.
//!
//! Every clock cycle the model decides which of up to 32 in-flight
//! instructions have their operands available and which subset of those —
//! bounded by the 16-wide issue limit — should dispatch, while preserving
//! true data dependencies and never dispatching an instruction twice. This
//! crate implements:
//! 1. **Core:** Instruction window, readiness scoreboard, dependency-graph
//!    builder, two-tier priority classifier, issue selector and the
//!    two-phase scheduler that latches one value between its phases.
//! 2. **Sim:** A reference driver closing the allocate → issue → complete →
//!    retire loop with per-class execution latencies.
//! 3. **Config:** JSON-deserializable run parameters.
//! 4. **Stats:** Scheduling statistics with sectioned reporting.

/// Common types and constants (geometry, contract errors).
pub mod common;
/// Model configuration (defaults and JSON deserialization).
pub mod config;
/// Scheduler core (window, scoreboard, stages, two-phase orchestration).
pub mod core;
/// Reference driver (execution latencies, allocation, retirement).
pub mod sim;
/// Scheduling statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The two-phase scheduler; owns one window and one scoreboard.
pub use crate::core::pipeline::scheduler::Scheduler;
/// Reference driver that exercises a scheduler against a program feed.
pub use crate::sim::Simulator;
