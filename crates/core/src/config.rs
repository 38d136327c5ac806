//! Configuration for the scheduler model.
//!
//! This module defines the structures used to parameterize a driven run. It
//! provides:
//! 1. **Defaults:** Baseline execution latencies and run limits.
//! 2. **Structures:** Hierarchical config for general settings and latencies.
//!
//! Configuration is supplied as JSON or built with `Config::default()`. The
//! window geometry (32 slots, 16-wide issue, 64 registers) is deliberately
//! *not* configuration — it is fixed by the model's bit widths; see
//! [`crate::common::constants`].

use serde::Deserialize;

/// Default configuration constants for the model.
mod defaults {
    /// Cycles a simple arithmetic operation occupies its execution unit.
    pub const ALU_LATENCY: u64 = 1;

    /// Cycles a multiply occupies its execution unit.
    pub const MUL_LATENCY: u64 = 4;

    /// Cycles a load occupies its execution unit.
    pub const LOAD_LATENCY: u64 = 6;

    /// Upper bound on the length of a driven run.
    pub const MAX_CYCLES: u64 = 100_000;
}

/// Root configuration structure.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use oosched_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.latency.alu, 1);
/// assert!(!config.general.trace_cycles);
/// ```
///
/// Deserializing from JSON; omitted fields keep their defaults:
///
/// ```
/// use oosched_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_cycles": true },
///     "latency": { "mul": 3, "load": 8 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_cycles);
/// assert_eq!(config.latency.mul, 3);
/// assert_eq!(config.latency.load, 8);
/// assert_eq!(config.latency.alu, 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Execution-unit latencies by operation class.
    #[serde(default)]
    pub latency: LatencyConfig,
}

/// General run settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a per-cycle trace event from the driver.
    #[serde(default)]
    pub trace_cycles: bool,

    /// Cycle budget for a driven run; `Simulator::run` stops here even if
    /// the program has not drained.
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default cycle budget.
    fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_cycles: false,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Execution-unit latencies by operation class, in cycles.
///
/// Values below one cycle are treated as one by the execution model.
#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    /// Simple arithmetic.
    #[serde(default = "LatencyConfig::default_alu")]
    pub alu: u64,

    /// Multiply.
    #[serde(default = "LatencyConfig::default_mul")]
    pub mul: u64,

    /// Load.
    #[serde(default = "LatencyConfig::default_load")]
    pub load: u64,
}

impl LatencyConfig {
    /// Returns the default simple-arithmetic latency.
    fn default_alu() -> u64 {
        defaults::ALU_LATENCY
    }

    /// Returns the default multiply latency.
    fn default_mul() -> u64 {
        defaults::MUL_LATENCY
    }

    /// Returns the default load latency.
    fn default_load() -> u64 {
        defaults::LOAD_LATENCY
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            alu: defaults::ALU_LATENCY,
            mul: defaults::MUL_LATENCY,
            load: defaults::LOAD_LATENCY,
        }
    }
}
