//! Hand-built scheduling scenarios.
//!
//! Each test constructs an explicit window/scoreboard state and checks the
//! exact bundles the scheduler produces, cycle by cycle.

use pretty_assertions::assert_eq;

use crate::common::{alu, scheduler_with_ready, WindowBuilder};
use oosched_core::Scheduler;
use oosched_core::core::pipeline::depgraph::build_dependency_graph;
use oosched_core::core::pipeline::latches::CompletionReport;

// ══════════════════════════════════════════════════════════
// 1. Degenerate states
// ══════════════════════════════════════════════════════════

#[test]
fn empty_window_empty_scoreboard_idles() {
    let mut sched = Scheduler::new();

    sched.run_phase0();
    assert!(sched.latched_partition().is_empty());
    assert!(sched.run_phase1().is_empty());
}

#[test]
fn occupied_window_empty_scoreboard_idles() {
    let mut sched = Scheduler::new();
    *sched.window_mut() = WindowBuilder::new().at(10, alu(1, 2, 5)).build();

    sched.run_phase0();
    assert!(sched.run_phase1().is_empty(), "no source is ready");
}

#[test]
fn dispatched_slot_never_reselected() {
    let mut sched = scheduler_with_ready(&[1, 2]);
    *sched.window_mut() = WindowBuilder::new()
        .dispatched_at(20, alu(1, 2, 5))
        .at(10, alu(1, 2, 6))
        .build();

    sched.run_phase0();
    let bundle = sched.run_phase1();
    assert_eq!(bundle.iter().collect::<Vec<_>>(), vec![10]);
}

// ══════════════════════════════════════════════════════════
// 2. Read-after-write pair
// ══════════════════════════════════════════════════════════

#[test]
fn raw_pair_issues_producer_then_consumer() {
    let mut sched = scheduler_with_ready(&[1, 2, 3]);
    *sched.window_mut() = WindowBuilder::new()
        .at(10, alu(1, 2, 5))
        .at(5, alu(5, 3, 6))
        .build();

    let graph = build_dependency_graph(sched.window());
    assert!(graph.has_edge(10, 5));
    assert_eq!(graph.edge_count(), 1);

    sched.run_phase0();
    let first = sched.run_phase1();
    assert_eq!(first.iter().collect::<Vec<_>>(), vec![10]);

    sched.on_complete(&[CompletionReport {
        dest: 5,
        completed: true,
    }]);

    sched.run_phase0();
    let second = sched.run_phase1();
    assert_eq!(second.iter().collect::<Vec<_>>(), vec![5]);
}

// ══════════════════════════════════════════════════════════
// 3. Width saturation
// ══════════════════════════════════════════════════════════

#[test]
fn twenty_independent_split_sixteen_then_four() {
    let mut ready_regs = Vec::new();
    let mut builder = WindowBuilder::new();
    for position in 0..20u8 {
        let src = position;
        let dest = 40 + position;
        ready_regs.push(src);
        builder = builder.at(position as usize, alu(src, src, dest));
    }
    let mut sched = scheduler_with_ready(&ready_regs);
    *sched.window_mut() = builder.build();

    sched.run_phase0();
    let first = sched.run_phase1();
    assert_eq!(
        first.iter().collect::<Vec<_>>(),
        (4..20usize).rev().collect::<Vec<_>>()
    );

    sched.run_phase0();
    let second = sched.run_phase1();
    assert_eq!(
        second.iter().collect::<Vec<_>>(),
        (0..4usize).rev().collect::<Vec<_>>()
    );
}

// ══════════════════════════════════════════════════════════
// 4. Write-after-read rejection
// ══════════════════════════════════════════════════════════

#[test]
fn war_pair_carries_no_edge_and_issues_together() {
    // Position 15 reads register 5; position 5 writes register 5. The
    // reader is older, so no ordering exists in either direction.
    let mut sched = scheduler_with_ready(&[1, 2, 3, 5]);
    *sched.window_mut() = WindowBuilder::new()
        .at(15, alu(5, 1, 9))
        .at(5, alu(2, 3, 5))
        .build();

    let graph = build_dependency_graph(sched.window());
    assert!(!graph.has_edge(15, 5));
    assert!(!graph.has_edge(5, 15));
    assert_eq!(graph.edge_count(), 0);

    sched.run_phase0();
    let bundle = sched.run_phase1();
    assert_eq!(bundle.iter().collect::<Vec<_>>(), vec![15, 5]);
}

// ══════════════════════════════════════════════════════════
// 5. Diamond dependency
// ══════════════════════════════════════════════════════════

#[test]
fn diamond_issues_in_three_waves() {
    let mut sched = scheduler_with_ready(&[1, 2, 3, 4]);
    *sched.window_mut() = WindowBuilder::new()
        .at(25, alu(1, 2, 10))
        .at(20, alu(10, 3, 11))
        .at(15, alu(10, 4, 12))
        .at(10, alu(11, 12, 13))
        .build();

    let graph = build_dependency_graph(sched.window());
    assert!(graph.has_edge(25, 20));
    assert!(graph.has_edge(25, 15));
    assert!(graph.has_edge(20, 10));
    assert!(graph.has_edge(15, 10));
    assert_eq!(graph.edge_count(), 4);

    sched.run_phase0();
    assert_eq!(sched.run_phase1().iter().collect::<Vec<_>>(), vec![25]);

    sched.on_complete(&[CompletionReport {
        dest: 10,
        completed: true,
    }]);
    sched.run_phase0();
    assert_eq!(sched.run_phase1().iter().collect::<Vec<_>>(), vec![20, 15]);

    sched.on_complete(&[
        CompletionReport {
            dest: 11,
            completed: true,
        },
        CompletionReport {
            dest: 12,
            completed: true,
        },
    ]);
    sched.run_phase0();
    assert_eq!(sched.run_phase1().iter().collect::<Vec<_>>(), vec![10]);
}
