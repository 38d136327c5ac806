//! Producer→consumer dependency graph over window positions.
//!
//! The graph is the full 32×32 relation derived from one cycle's window
//! contents: entry (producer, consumer) set means the consumer must wait for
//! the producer. Construction mirrors the 1024-way parallel register
//! comparison of the hardware it models — every ordered pair of occupied
//! positions is examined, and no pair's verdict depends on another's.
//!
//! Only true read-after-write relationships are captured. The age filter
//! (producer strictly older than consumer) rejects write-after-read and
//! write-after-write pairs, which carry no ordering requirement when program
//! order is the position order and no renaming exists.

use crate::common::constants::WINDOW_SLOTS;
use crate::core::pipeline::window::Window;

/// The producer→consumer relation for one cycle's window contents.
///
/// Row `i` is the bitmap of positions waiting for position `i`. The relation
/// is irreflexive and only ever points from an older position to a strictly
/// younger one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    dependents: [u32; WINDOW_SLOTS],
}

impl DependencyGraph {
    /// Creates a graph with no edges.
    pub fn new() -> Self {
        Self {
            dependents: [0; WINDOW_SLOTS],
        }
    }

    /// True if `consumer` must wait for `producer`.
    #[inline]
    pub fn has_edge(&self, producer: usize, consumer: usize) -> bool {
        self.dependents[producer] & (1 << consumer) != 0
    }

    /// Bitmap of the positions waiting for `producer`.
    #[inline]
    pub fn dependents_of(&self, producer: usize) -> u32 {
        self.dependents[producer]
    }

    /// True if anything waits for `position`.
    #[inline]
    pub fn has_dependents(&self, position: usize) -> bool {
        self.dependents[position] != 0
    }

    /// Total number of edges in the relation.
    pub fn edge_count(&self) -> usize {
        self.dependents
            .iter()
            .map(|row| row.count_ones() as usize)
            .sum()
    }

    fn add_edge(&mut self, producer: usize, consumer: usize) {
        self.dependents[producer] |= 1 << consumer;
    }
}

/// Builds the dependency relation for the current window contents.
///
/// For every ordered pair of occupied positions, an edge is recorded iff the
/// consumer reads the producer's destination through either source field and
/// the producer sits at a strictly higher (older) position. The scoreboard is
/// never consulted: the graph describes ordering, not readiness.
///
/// A consumer reading the producer's destination through both of its sources
/// contributes exactly one edge. Several older producers of one register each
/// keep their own edge — no "most recent producer" filtering is attempted.
/// Self-dependency is impossible: the pair walk never compares a position
/// with itself, and a record reading its own destination register is not a
/// hazard on itself.
pub fn build_dependency_graph(window: &Window) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (producer, source) in window.iter_occupied() {
        for (consumer, sink) in window.iter_occupied() {
            // Age filter: only an older producer orders a younger consumer.
            // This admits read-after-write and rejects write-after-read and
            // write-after-write in one comparison.
            if producer <= consumer {
                continue;
            }
            if sink.src_a == source.dest || sink.src_b == source.dest {
                graph.add_edge(producer, consumer);
            }
        }
    }
    graph
}
