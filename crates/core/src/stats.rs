//! Scheduling statistics collection and reporting.
//!
//! This module tracks performance metrics for driven runs. It provides:
//! 1. **Cycle counts:** Total cycles and derived throughput (instructions per cycle).
//! 2. **Issue behavior:** Bundles, per-tier instruction counts, saturation and idle cycles.
//! 3. **Lifecycle:** Allocations, completions and retirements.

use std::time::Instant;

/// Scheduling statistics for one driven run.
#[derive(Clone, Debug)]
pub struct SchedStats {
    start_time: Instant,
    /// Total model cycles elapsed.
    pub cycles: u64,
    /// Instructions accepted into the window.
    pub instructions_allocated: u64,
    /// Instructions dispatched to execution units.
    pub instructions_issued: u64,
    /// Instructions whose destination write landed.
    pub instructions_completed: u64,
    /// Instructions retired (window slot freed).
    pub instructions_retired: u64,

    /// Cycles that produced a non-empty issue bundle.
    pub bundles_issued: u64,
    /// Cycles that produced an empty bundle.
    pub empty_bundles: u64,
    /// Bundles that saturated the full issue width.
    pub saturated_bundles: u64,
    /// Instructions issued out of the blocking tier.
    pub issued_blocking: u64,
    /// Instructions issued out of the leaf tier.
    pub issued_leaf: u64,
}

impl Default for SchedStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_allocated: 0,
            instructions_issued: 0,
            instructions_completed: 0,
            instructions_retired: 0,
            bundles_issued: 0,
            empty_bundles: 0,
            saturated_bundles: 0,
            issued_blocking: 0,
            issued_leaf: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"issue"`. Pass an empty slice to
/// `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "issue"];

impl SchedStats {
    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"` or `"issue"`.
    /// Pass an empty slice to print all sections (same as `print()`).
    /// Division by zero is prevented by clamping cycle and bundle counts to
    /// at least one before any ratio is formed.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let bundles = if self.bundles_issued == 0 {
            1
        } else {
            self.bundles_issued
        };

        if want("summary") {
            let ipc = self.instructions_issued as f64 / cyc as f64;
            let khz = (self.cycles as f64 / seconds) / 1000.0;
            println!("\n==========================================================");
            println!("SCHEDULER MODEL STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_freq                 {khz:.2} kHz");
            println!("sim_allocated            {}", self.instructions_allocated);
            println!("sim_issued               {}", self.instructions_issued);
            println!("sim_completed            {}", self.instructions_completed);
            println!("sim_retired              {}", self.instructions_retired);
            println!("sim_ipc                  {ipc:.4}");
            println!("----------------------------------------------------------");
        }
        if want("issue") {
            let issued = if self.instructions_issued == 0 {
                1
            } else {
                self.instructions_issued
            };
            println!("ISSUE BEHAVIOR");
            println!(
                "  bundles.nonempty       {} ({:.2}%)",
                self.bundles_issued,
                (self.bundles_issued as f64 / cyc as f64) * 100.0
            );
            println!(
                "  bundles.empty          {} ({:.2}%)",
                self.empty_bundles,
                (self.empty_bundles as f64 / cyc as f64) * 100.0
            );
            println!(
                "  bundles.saturated      {} ({:.2}%)",
                self.saturated_bundles,
                (self.saturated_bundles as f64 / bundles as f64) * 100.0
            );
            println!(
                "  bundles.occupancy      {:.2}",
                self.instructions_issued as f64 / bundles as f64
            );
            println!(
                "  tier.blocking          {} ({:.2}%)",
                self.issued_blocking,
                (self.issued_blocking as f64 / issued as f64) * 100.0
            );
            println!(
                "  tier.leaf              {} ({:.2}%)",
                self.issued_leaf,
                (self.issued_leaf as f64 / issued as f64) * 100.0
            );
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
