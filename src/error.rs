//! Error types for lane-contract violations.
//!
//! The reference hardware semantics for these cases is undefined behavior
//! (reading past a register, faulting on a misaligned load). This crate
//! checks them instead and reports a typed error. Numeric edge cases
//! (wrapping arithmetic, IEEE-754 specials, integer division by zero) are
//! *not* errors; they keep their native Rust semantics.

use thiserror::Error;

/// Contract-violation errors raised by the checked lane and memory APIs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneError {
    /// A lane index was at or past the vector's lane count.
    #[error("lane index {index} out of range for a {lanes}-lane vector")]
    IndexOutOfRange { index: usize, lanes: usize },

    /// An aligned load or store was given an under-aligned pointer.
    #[error("address {addr:#x} violates the required {required}-byte alignment")]
    AlignmentViolation { addr: usize, required: usize },

    /// A slice was too short for the lanes an operation must touch.
    #[error("operation touches {expected} lanes but the slice provides {actual}")]
    LaneCountMismatch { expected: usize, actual: usize },
}

impl LaneError {
    /// Lane index `index` is invalid for an `lanes`-lane vector.
    pub fn index_out_of_range(index: usize, lanes: usize) -> Self {
        Self::IndexOutOfRange { index, lanes }
    }

    /// `addr` does not satisfy `required`-byte alignment.
    pub fn alignment_violation(addr: usize, required: usize) -> Self {
        Self::AlignmentViolation { addr, required }
    }

    /// The slice holds `actual` elements where `expected` are needed.
    pub fn lane_count_mismatch(expected: usize, actual: usize) -> Self {
        Self::LaneCountMismatch { expected, actual }
    }
}

/// Result type alias for lane operations.
pub type Result<T> = core::result::Result<T, LaneError>;
