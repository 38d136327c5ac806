//! Two-phase scheduler orchestration.
//!
//! The scheduler models the single pipeline register sitting between the
//! dependency/priority half and the issue half of a cycle:
//!
//! 1. **Phase 0** runs ready detection, dependency-graph construction and
//!    priority classification against the current window and scoreboard,
//!    then deposits the resulting partition in the latch.
//! 2. **Phase 1** selects an issue bundle from the latched partition and
//!    applies the issue-side scoreboard update.
//! 3. **Completion handling** is independent of both phases and may run at
//!    any cycle boundary.
//!
//! Phase 1 of cycle N always observes the partition computed when Phase 0 of
//! cycle N ran, even if the window or scoreboard changed in between: a
//! completion landing between the two phases becomes visible at the *next*
//! Phase 0, one cycle later. That one-cycle visibility delay is what lets the
//! two halves be pipelined instead of evaluated as one long combinational
//! step, and it must hold exactly for the model to track the hardware
//! bit for bit.

use tracing::{debug, trace};

use crate::core::pipeline::classify::classify_priority;
use crate::core::pipeline::depgraph::build_dependency_graph;
use crate::core::pipeline::latches::{CompletionReport, IssueBundle, PriorityPartition};
use crate::core::pipeline::ready::compute_ready_set;
use crate::core::pipeline::scoreboard::Scoreboard;
use crate::core::pipeline::select::select_issue_bundle;
use crate::core::pipeline::update::{apply_completion_update, apply_issue_update};
use crate::core::pipeline::window::Window;

/// One scheduler instance: one window, one scoreboard, one cross-phase latch.
///
/// Instances share nothing; an embedding simulator may drive any number of
/// them in parallel without synchronization.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    window: Window,
    scoreboard: Scoreboard,
    /// Partition produced by the most recently completed Phase 0. Written
    /// only at the phase boundary, never mutated in place.
    latched: PriorityPartition,
}

impl Scheduler {
    /// Creates a scheduler with an empty window and an all-pending
    /// scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler whose registers all start with committed data.
    pub fn with_ready_registers() -> Self {
        Self {
            scoreboard: Scoreboard::all_ready(),
            ..Self::default()
        }
    }

    /// Dependency/priority phase.
    ///
    /// Reads the current window and scoreboard, classifies the ready set and
    /// latches the partition for the next Phase 1.
    pub fn run_phase0(&mut self) {
        let ready = compute_ready_set(&self.window, &self.scoreboard);
        let graph = build_dependency_graph(&self.window);
        self.latched = classify_priority(ready, &graph);
        trace!(
            ready,
            blocking = self.latched.blocking,
            leaf = self.latched.leaf,
            "phase0 latched partition"
        );
    }

    /// Issue phase.
    ///
    /// Selects from the latched partition, then applies the issue-side
    /// update. Every latched candidate is first qualified against its
    /// current `dispatched` flag — the same per-entry qualification the
    /// hardware applies combinationally — so repeated Phase 1 runs can never
    /// dispatch the same instruction twice.
    pub fn run_phase1(&mut self) -> IssueBundle {
        let not_dispatched = !self.window.dispatched_mask();
        let qualified = PriorityPartition {
            blocking: self.latched.blocking & not_dispatched,
            leaf: self.latched.leaf & not_dispatched,
        };
        let bundle = select_issue_bundle(&qualified);
        apply_issue_update(&mut self.window, &mut self.scoreboard, &bundle);
        trace!(
            count = bundle.len(),
            positions = bundle.position_mask(),
            "phase1 issued"
        );
        bundle
    }

    /// Completion handling, independent of the two phases.
    ///
    /// Execution units report up to one (destination, completed) pair per
    /// unit; each completed destination becomes ready. The readiness change
    /// is invisible to issue until the next Phase 0 reads the scoreboard.
    pub fn on_complete(&mut self, reports: &[CompletionReport]) {
        debug!(count = reports.len(), "completion reports");
        apply_completion_update(&mut self.scoreboard, reports);
    }

    /// The partition deposited by the most recent Phase 0.
    #[inline]
    pub fn latched_partition(&self) -> PriorityPartition {
        self.latched
    }

    /// Borrows the instruction window.
    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Mutably borrows the instruction window (allocation, retirement and
    /// flush control go through this).
    #[inline]
    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Borrows the scoreboard.
    #[inline]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Mutably borrows the scoreboard.
    #[inline]
    pub fn scoreboard_mut(&mut self) -> &mut Scoreboard {
        &mut self.scoreboard
    }
}
