//! The scheduler pipeline.
//!
//! This module contains the two-stage issue pipeline and the state it
//! schedules over. It includes the following components:
//! 1. **Window:** The 32-slot instruction window; position is age.
//! 2. **Scoreboard:** Per-register readiness bitmap.
//! 3. **Stages:** Ready detection, dependency-graph construction, priority
//!    classification, issue selection and the two updater halves.
//! 4. **Latches:** The values carried between the two phases.
//! 5. **Scheduler:** Two-phase orchestration around the cross-phase latch.

/// Two-tier priority classification of the ready set.
pub mod classify;

/// Dependency-graph construction with age-based hazard filtering.
pub mod depgraph;

/// Cross-phase and issue-boundary value types.
pub mod latches;

/// Ready-set detection.
pub mod ready;

/// Register readiness scoreboard.
pub mod scoreboard;

/// Two-phase scheduler orchestration.
pub mod scheduler;

/// Bounded-width oldest-first issue selection.
pub mod select;

/// Issue-side and completion-side state updates.
pub mod update;

/// Instruction window and slot records.
pub mod window;
