//! Property-based invariants over arbitrary windows and scoreboards.
//!
//! These hold for *every* reachable state, so they are checked against
//! generated windows (arbitrary occupancy, dispatch flags and register
//! fields) and generated scoreboards rather than hand-picked cases.

use proptest::prelude::*;

use oosched_core::Scheduler;
use oosched_core::common::constants::{ISSUE_WIDTH, WINDOW_SLOTS};
use oosched_core::core::pipeline::classify::classify_priority;
use oosched_core::core::pipeline::depgraph::build_dependency_graph;
use oosched_core::core::pipeline::ready::compute_ready_set;
use oosched_core::core::pipeline::scoreboard::Scoreboard;
use oosched_core::core::pipeline::select::select_issue_bundle;
use oosched_core::core::pipeline::window::{SlotOp, Window};

fn arb_window() -> impl Strategy<Value = Window> {
    prop::collection::vec(
        prop::option::of((any::<bool>(), 0u8..64, 0u8..64, 0u8..64)),
        WINDOW_SLOTS,
    )
    .prop_map(|specs| {
        let mut window = Window::new();
        for (position, spec) in specs.into_iter().enumerate() {
            if let Some((dispatched, src_a, src_b, dest)) = spec {
                window
                    .allocate(position, SlotOp::new(src_a, src_b, dest, 0, 0))
                    .unwrap();
                if dispatched {
                    window.mark_dispatched(position);
                }
            }
        }
        window
    })
}

fn arb_scoreboard() -> impl Strategy<Value = Scoreboard> {
    any::<u64>().prop_map(|mask| {
        let mut scoreboard = Scoreboard::new();
        for reg in 0u8..64 {
            if mask & (1 << reg) != 0 {
                scoreboard.mark_ready(reg);
            }
        }
        scoreboard
    })
}

proptest! {
    #[test]
    fn partition_tiers_disjoint_and_cover_ready(
        window in arb_window(),
        scoreboard in arb_scoreboard(),
    ) {
        let ready = compute_ready_set(&window, &scoreboard);
        let graph = build_dependency_graph(&window);
        let partition = classify_priority(ready, &graph);

        prop_assert_eq!(partition.blocking & partition.leaf, 0);
        prop_assert_eq!(partition.ready_set(), ready);
    }

    #[test]
    fn ready_set_excludes_vacant_and_dispatched(
        window in arb_window(),
        scoreboard in arb_scoreboard(),
    ) {
        let ready = compute_ready_set(&window, &scoreboard);
        prop_assert_eq!(ready & !window.occupied_mask(), 0);
        prop_assert_eq!(ready & window.dispatched_mask(), 0);
    }

    #[test]
    fn graph_edges_old_to_young_with_empty_diagonal(window in arb_window()) {
        let graph = build_dependency_graph(&window);
        for producer in 0..WINDOW_SLOTS {
            prop_assert!(!graph.has_edge(producer, producer));
            for consumer in 0..WINDOW_SLOTS {
                if graph.has_edge(producer, consumer) {
                    prop_assert!(producer > consumer);
                }
            }
        }
    }

    #[test]
    fn bundle_drawn_from_one_tier_oldest_first(
        window in arb_window(),
        scoreboard in arb_scoreboard(),
    ) {
        let ready = compute_ready_set(&window, &scoreboard);
        let graph = build_dependency_graph(&window);
        let partition = classify_priority(ready, &graph);
        let bundle = select_issue_bundle(&partition);

        prop_assert!(bundle.len() <= ISSUE_WIDTH);

        // Never outside the tier it was drawn from.
        let tier = if partition.blocking != 0 {
            partition.blocking
        } else {
            partition.leaf
        };
        prop_assert_eq!(bundle.position_mask() & !tier, 0);

        // Strictly descending lane order.
        let positions: Vec<usize> = bundle.iter().collect();
        for pair in positions.windows(2) {
            prop_assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn repeated_phase1_never_double_issues(
        window in arb_window(),
        scoreboard in arb_scoreboard(),
    ) {
        let mut sched = Scheduler::new();
        *sched.window_mut() = window;
        *sched.scoreboard_mut() = scoreboard;

        sched.run_phase0();
        let mut seen = 0u32;
        for _ in 0..4 {
            let bundle = sched.run_phase1();
            prop_assert_eq!(bundle.position_mask() & seen, 0);
            seen |= bundle.position_mask();
        }
    }
}
