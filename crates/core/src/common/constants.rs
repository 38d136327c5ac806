//! Fixed Hardware Geometry.
//!
//! These values are constants rather than configuration: the model's data
//! paths are fixed-width (32-bit position masks, a 64-bit scoreboard, a
//! 16-bit bundle validity mask), so changing them means changing types, not
//! numbers.

/// Number of slots in the instruction window.
///
/// A slot's position doubles as the instruction's program-order age:
/// position 31 is the oldest, position 0 the newest.
pub const WINDOW_SLOTS: usize = 32;

/// Maximum number of instructions dispatched per cycle, equal to the number
/// of execution units.
pub const ISSUE_WIDTH: usize = 16;

/// Number of architectural registers tracked by the scoreboard.
pub const REGISTER_COUNT: usize = 64;
