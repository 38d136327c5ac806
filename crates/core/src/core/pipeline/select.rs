//! Bounded-width oldest-first issue selection.

use crate::common::constants::{ISSUE_WIDTH, WINDOW_SLOTS};
use crate::core::pipeline::latches::{IssueBundle, PriorityPartition};

/// Picks the positions to dispatch this cycle.
///
/// The blocking tier is taken — whole or truncated — before the leaf tier is
/// ever considered; the two tiers never interleave within one cycle. Inside
/// the chosen tier, positions are taken in strictly descending order, oldest
/// first, until the tier runs out or the issue width saturates. Ties cannot
/// occur: positions are unique integers under a total order.
///
/// The selector is stateless. Whatever it leaves behind is not remembered;
/// unselected positions simply compete again when a later partition contains
/// them.
pub fn select_issue_bundle(partition: &PriorityPartition) -> IssueBundle {
    let tier = if partition.blocking != 0 {
        partition.blocking
    } else {
        partition.leaf
    };

    let mut bundle = IssueBundle::new();
    for position in (0..WINDOW_SLOTS).rev() {
        if bundle.len() == ISSUE_WIDTH {
            break;
        }
        if tier & (1 << position) != 0 {
            bundle.push(position);
        }
    }
    bundle
}
