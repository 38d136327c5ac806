//! Error types for the collaborator contracts.
//!
//! The scheduling core itself is total over its fixed-width inputs — ready
//! detection, graph construction, classification, selection and the two
//! scoreboard updates have no failure modes. Errors exist only at the
//! boundary where external collaborators (the decode-side allocator, flush
//! control) touch the window.

use thiserror::Error;

/// Contract violations raised at the window boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// The allocator wrote into a position that already holds a live
    /// instruction. Only retirement may free a slot for reuse.
    #[error("window position {position} is already occupied")]
    SlotOccupied {
        /// Window position of the attempted write.
        position: usize,
    },

    /// A position outside the 32-slot window was named.
    #[error("window position {position} is outside the instruction window")]
    PositionOutOfRange {
        /// The offending position.
        position: usize,
    },
}
