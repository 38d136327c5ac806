//! Two-tier priority classification of the ready set.

use crate::common::constants::WINDOW_SLOTS;
use crate::core::pipeline::depgraph::DependencyGraph;
use crate::core::pipeline::latches::PriorityPartition;

/// Splits the ready set into blocking and leaf tiers.
///
/// A ready position is blocking when its outgoing edge set is non-empty —
/// something downstream is waiting on it — and leaf otherwise. Checking
/// dependent-set emptiness instead of computing longest dependent chains is a
/// deliberate approximation of critical-path scheduling: it captures most of
/// the benefit at a fixed single-pass cost, which is what lets the stage fit
/// inside its pipeline phase.
pub fn classify_priority(ready: u32, graph: &DependencyGraph) -> PriorityPartition {
    let mut partition = PriorityPartition::default();
    for position in 0..WINDOW_SLOTS {
        if ready & (1 << position) == 0 {
            continue;
        }
        if graph.has_dependents(position) {
            partition.blocking |= 1 << position;
        } else {
            partition.leaf |= 1 << position;
        }
    }
    partition
}
