//! Scoreboard and window updates driven by the pipeline.
//!
//! Two independent halves: the issue-side transition applied after selection,
//! and the completion-side transition applied when execution units report.
//! Both are pure bitmap/flag writes with no failure modes.

use crate::core::pipeline::latches::{CompletionReport, IssueBundle};
use crate::core::pipeline::scoreboard::Scoreboard;
use crate::core::pipeline::window::Window;

/// Applies the issue-side transition for every selected position: the
/// destination register goes pending and the dispatched flag is set.
///
/// Order across positions does not matter. Two positions in one bundle may
/// share a destination register; "pending" is idempotent, so the outcome is
/// identical however the writes land.
pub fn apply_issue_update(window: &mut Window, scoreboard: &mut Scoreboard, bundle: &IssueBundle) {
    for position in bundle.iter() {
        let dest = window.slot(position).dest;
        scoreboard.mark_pending(dest);
        window.mark_dispatched(position);
    }
}

/// Applies completion reports from the execution units: every completed
/// destination register is marked ready. Reports flagged incomplete are
/// ignored.
pub fn apply_completion_update(scoreboard: &mut Scoreboard, reports: &[CompletionReport]) {
    for report in reports {
        if report.completed {
            scoreboard.mark_ready(report.dest);
        }
    }
}
