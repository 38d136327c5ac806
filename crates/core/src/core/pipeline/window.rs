//! Instruction window: the ordered set of in-flight instructions.
//!
//! The window is a fixed array of 32 slots. A slot's position doubles as the
//! instruction's program-order age — position 31 entered first and is the
//! oldest, position 0 the newest. No age field exists anywhere: [`Window::age_of`]
//! is a pure function of position, so the age/position invariant cannot
//! drift. Occupancy is tracked solely by each record's `valid` flag.

use crate::common::constants::WINDOW_SLOTS;
use crate::common::error::ModelError;

/// One decoded operation occupying a window slot.
///
/// Scheduling reads only the register fields and the two flags; `op` and
/// `imm` travel through untouched for the execution units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotOp {
    /// Slot holds a live instruction.
    pub valid: bool,
    /// Already handed to an execution unit; guards against re-issue.
    pub dispatched: bool,
    /// First source register index (0–63).
    pub src_a: u8,
    /// Second source register index (0–63).
    pub src_b: u8,
    /// Destination register index (0–63).
    pub dest: u8,
    /// Operation code. Opaque to every scheduling decision.
    pub op: u32,
    /// Immediate operand. Opaque to every scheduling decision.
    pub imm: i64,
}

impl SlotOp {
    /// Creates a live, not-yet-dispatched record.
    pub fn new(src_a: u8, src_b: u8, dest: u8, op: u32, imm: i64) -> Self {
        Self {
            valid: true,
            dispatched: false,
            src_a,
            src_b,
            dest,
            op,
            imm,
        }
    }
}

/// Fixed-capacity ordered sequence of instruction slots.
#[derive(Clone, Debug)]
pub struct Window {
    slots: [SlotOp; WINDOW_SLOTS],
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

impl Window {
    /// Creates an empty window.
    pub fn new() -> Self {
        Self {
            slots: [SlotOp::default(); WINDOW_SLOTS],
        }
    }

    /// Program-order age of a position. Higher is older.
    ///
    /// Age is defined to *be* the position; this function exists to name the
    /// invariant, not to compute anything.
    #[inline]
    pub fn age_of(position: usize) -> usize {
        position
    }

    /// Borrows the record at `position`.
    #[inline]
    pub fn slot(&self, position: usize) -> &SlotOp {
        &self.slots[position]
    }

    /// Number of occupied slots.
    pub fn occupancy(&self) -> usize {
        self.slots.iter().filter(|slot| slot.valid).count()
    }

    /// True if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| !slot.valid)
    }

    /// Iterates over occupied positions and their records, youngest first.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, &SlotOp)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.valid)
    }

    /// Bitmap of occupied positions.
    pub fn occupied_mask(&self) -> u32 {
        self.iter_occupied()
            .fold(0, |mask, (position, _)| mask | (1 << position))
    }

    /// Bitmap of positions whose instruction has been dispatched.
    pub fn dispatched_mask(&self) -> u32 {
        self.iter_occupied()
            .filter(|(_, slot)| slot.dispatched)
            .fold(0, |mask, (position, _)| mask | (1 << position))
    }

    /// Installs a fresh record at `position`.
    ///
    /// The record enters live and undispatched regardless of the flags it
    /// carries. The allocator contract forbids writing into an occupied
    /// position; only [`Window::clear`] frees one.
    pub fn allocate(&mut self, position: usize, op: SlotOp) -> Result<(), ModelError> {
        if position >= WINDOW_SLOTS {
            return Err(ModelError::PositionOutOfRange { position });
        }
        if self.slots[position].valid {
            return Err(ModelError::SlotOccupied { position });
        }
        self.slots[position] = SlotOp {
            valid: true,
            dispatched: false,
            ..op
        };
        Ok(())
    }

    /// Sets the dispatched flag at `position`.
    #[inline]
    pub fn mark_dispatched(&mut self, position: usize) {
        self.slots[position].dispatched = true;
    }

    /// Clears `valid` and `dispatched` at `position`, freeing the slot.
    ///
    /// Retirement and misprediction recovery both reclaim slots through this
    /// primitive. Clearing a vacant slot is a no-op.
    pub fn clear(&mut self, position: usize) {
        let slot = &mut self.slots[position];
        slot.valid = false;
        slot.dispatched = false;
    }

    /// Clears every position strictly younger than `position`.
    ///
    /// Misprediction recovery discards the instructions that entered after
    /// the faulting one. The scoreboard is deliberately left untouched: a
    /// destination marked pending by a discarded in-flight write stays
    /// pending until a completion report marks it ready again.
    pub fn invalidate_younger_than(&mut self, position: usize) {
        for younger in 0..position.min(WINDOW_SLOTS) {
            self.clear(younger);
        }
    }
}
