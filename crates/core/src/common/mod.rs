//! Common types and constants shared across the scheduler model.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Constants:** Fixed hardware geometry (window slots, issue width, register count).
//! 2. **Error Handling:** Contract violations raised at the collaborator boundary.

/// Fixed hardware geometry constants.
pub mod constants;

/// Error types for the collaborator contracts.
pub mod error;

pub use constants::{ISSUE_WIDTH, REGISTER_COUNT, WINDOW_SLOTS};
pub use error::ModelError;
