//! Ready detection: the slots whose operands are all available.

use crate::core::pipeline::scoreboard::Scoreboard;
use crate::core::pipeline::window::Window;

/// Computes the set of window positions eligible to issue this cycle.
///
/// A position is eligible iff its slot is occupied, has not yet been
/// dispatched, and both source registers read ready. Each position's check is
/// independent of every other's, so the result is identical under any
/// evaluation order — the property the parallel per-slot comparators this
/// models rely on.
pub fn compute_ready_set(window: &Window, scoreboard: &Scoreboard) -> u32 {
    let mut ready = 0u32;
    for (position, slot) in window.iter_occupied() {
        if slot.dispatched {
            continue;
        }
        if scoreboard.is_ready(slot.src_a) && scoreboard.is_ready(slot.src_b) {
            ready |= 1 << position;
        }
    }
    ready
}
