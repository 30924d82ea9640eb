//! Supported lane counts.
//!
//! Vectors exist only for the enumerated power-of-two lane counts a fixed
//! register file can back. `LaneCount<N>` is a type-level witness;
//! `SupportedLaneCount` is sealed so the set cannot grow behind the
//! contract's back.

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Type-level lane count.
pub struct LaneCount<const N: usize>;

impl<const N: usize> LaneCount<N> {
    /// The witnessed lane count.
    pub const LANES: usize = N;
}

/// Marker for lane counts the contract supports: 1, 2, 4, 8, 16, 32, 64.
pub trait SupportedLaneCount: Sealed {}

macro_rules! supported {
    ($($n:literal),+ $(,)?) => {
        $(
            impl Sealed for LaneCount<$n> {}
            impl SupportedLaneCount for LaneCount<$n> {}
        )+
    };
}

supported!(1, 2, 4, 8, 16, 32, 64);
