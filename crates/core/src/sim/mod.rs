//! Reference embedding that drives the scheduler end to end.
//!
//! The scheduler proper leaves decode, execution and retirement to external
//! collaborators. This module provides the reference set used by the
//! integration tests and by embedders wanting a complete closed loop: a
//! program feed that allocates into free slots, an execution-unit bank with
//! per-class latencies, and the retirement rule that frees a dispatched slot
//! once its destination reads ready again.

pub mod exec;

use std::collections::VecDeque;

use tracing::debug;

use crate::common::constants::{ISSUE_WIDTH, WINDOW_SLOTS};
use crate::common::error::ModelError;
use crate::config::Config;
use crate::core::pipeline::latches::{IssueBundle, PriorityPartition};
use crate::core::pipeline::scheduler::Scheduler;
use crate::core::pipeline::window::SlotOp;
use crate::sim::exec::ExecutionUnits;
use crate::stats::SchedStats;

/// Top-level driver: one scheduler plus its reference collaborators.
#[derive(Debug)]
pub struct Simulator {
    /// The scheduler under drive.
    pub scheduler: Scheduler,
    /// Scheduling statistics, updated every cycle.
    pub stats: SchedStats,
    units: ExecutionUnits,
    program: VecDeque<SlotOp>,
    /// Next position the allocator fills, descending. Reset to the top only
    /// when the window fully drains, so co-resident instructions always keep
    /// position order equal to program order.
    fill: usize,
    trace_cycles: bool,
    max_cycles: u64,
    cycle: u64,
}

impl Simulator {
    /// Creates a driver with an empty program feed and every register
    /// holding committed data.
    pub fn new(config: &Config) -> Self {
        Self {
            scheduler: Scheduler::with_ready_registers(),
            stats: SchedStats::default(),
            units: ExecutionUnits::new(config.latency.clone()),
            program: VecDeque::new(),
            fill: WINDOW_SLOTS,
            trace_cycles: config.general.trace_cycles,
            max_cycles: config.general.max_cycles,
            cycle: 0,
        }
    }

    /// Appends decoded operations, oldest first, to the program feed.
    pub fn load_program<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = SlotOp>,
    {
        self.program.extend(ops);
    }

    /// Current cycle count.
    #[inline]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// True when the program feed and the window are both empty.
    pub fn is_drained(&self) -> bool {
        self.program.is_empty() && self.scheduler.window().is_empty()
    }

    /// Advances the model by one clock cycle.
    ///
    /// Cycle order: completions land, retirement frees finished slots, the
    /// two scheduler phases run, the issued bundle enters the execution
    /// units, and the allocator backfills free slots from the program feed.
    /// Completions landing here arrive before Phase 0 and are therefore
    /// visible to it; a completion injected between the phases by an
    /// embedder would not be.
    pub fn tick(&mut self) -> Result<(), ModelError> {
        self.cycle += 1;
        self.stats.cycles += 1;

        // Completion path, asynchronous relative to the two phases. Reports
        // are delivered in unit-count chunks.
        let reports = self.units.tick();
        self.stats.instructions_completed += reports.len() as u64;
        for chunk in reports.chunks(ISSUE_WIDTH) {
            self.scheduler.on_complete(chunk);
        }

        self.retire();

        self.scheduler.run_phase0();
        let partition = self.scheduler.latched_partition();
        let bundle = self.scheduler.run_phase1();
        self.record_issue(&partition, &bundle);
        for position in bundle.iter() {
            let op = *self.scheduler.window().slot(position);
            self.units.accept(&op);
        }

        self.allocate()?;

        if self.trace_cycles {
            debug!(
                cycle = self.cycle,
                issued = bundle.len(),
                in_flight = self.units.in_flight(),
                occupancy = self.scheduler.window().occupancy(),
                "cycle"
            );
        }
        Ok(())
    }

    /// Runs until the program drains or the configured cycle budget is
    /// spent. Returns the number of cycles consumed by this call.
    pub fn run(&mut self) -> Result<u64, ModelError> {
        let start = self.cycle;
        while !self.is_drained() && self.cycle - start < self.max_cycles {
            self.tick()?;
        }
        Ok(self.cycle - start)
    }

    /// Frees every dispatched slot whose destination reads ready again.
    fn retire(&mut self) {
        let mut retired: Vec<usize> = Vec::new();
        for (position, slot) in self.scheduler.window().iter_occupied() {
            if slot.dispatched && self.scheduler.scoreboard().is_ready(slot.dest) {
                retired.push(position);
            }
        }
        for position in &retired {
            self.scheduler.window_mut().clear(*position);
        }
        self.stats.instructions_retired += retired.len() as u64;
    }

    /// Backfills free slots from the program feed.
    ///
    /// The fill pointer only descends, resetting to the top once the window
    /// fully drains; freed high positions are never reused while younger
    /// instructions remain resident, which would hand an older age to a
    /// newer instruction.
    ///
    /// Each accepted destination is marked pending on entry. The scoreboard
    /// is the only mechanism that holds a consumer back, so a destination
    /// produced inside the window must read pending from the moment its
    /// consumer could first be examined — the producer's own completion is
    /// what flips it ready. An operation reading its own destination is
    /// exempt: marking it pending would starve the operation of its source
    /// forever, and self-dependency is not a hazard.
    fn allocate(&mut self) -> Result<(), ModelError> {
        if self.scheduler.window().is_empty() {
            self.fill = WINDOW_SLOTS;
        }
        while self.fill > 0 && !self.program.is_empty() {
            let position = self.fill - 1;
            if let Some(op) = self.program.pop_front() {
                self.scheduler.window_mut().allocate(position, op)?;
                if op.dest != op.src_a && op.dest != op.src_b {
                    self.scheduler.scoreboard_mut().mark_pending(op.dest);
                }
                self.stats.instructions_allocated += 1;
            }
            self.fill = position;
        }
        Ok(())
    }

    fn record_issue(&mut self, partition: &PriorityPartition, bundle: &IssueBundle) {
        if bundle.is_empty() {
            self.stats.empty_bundles += 1;
            return;
        }
        let issued = bundle.len() as u64;
        self.stats.bundles_issued += 1;
        self.stats.instructions_issued += issued;
        if bundle.len() == ISSUE_WIDTH {
            self.stats.saturated_bundles += 1;
        }
        // Tiers never mix inside a bundle, so one overlap test attributes it.
        if bundle.position_mask() & partition.blocking != 0 {
            self.stats.issued_blocking += issued;
        } else {
            self.stats.issued_leaf += issued;
        }
    }
}
