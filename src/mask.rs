//! Boolean lane masks.
//!
//! A [`Mask<N>`] carries one boolean per lane. Masks come out of the
//! lane-wise comparisons on [`Vector`](crate::vector::Vector) and feed the
//! `masked_*` operation family, where a false lane always means "leave the
//! original value alone". They combine with `& | ^ !` like the comparison
//! chains that produce them; they carry no arithmetic.

use core::array;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not};

use crate::element::SimdElement;
use crate::error::{LaneError, Result};
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::vector::Vector;

/// `N` boolean lanes, one per vector lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask<const N: usize>([bool; N])
where
    LaneCount<N>: SupportedLaneCount;

impl<const N: usize> Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    /// Number of lanes.
    pub const LANES: usize = N;

    /// Builds a mask from explicit lane values.
    #[inline]
    pub const fn new(lanes: [bool; N]) -> Self {
        Self(lanes)
    }

    /// Builds a mask with every lane set to `value`.
    #[inline]
    pub const fn splat(value: bool) -> Self {
        Self([value; N])
    }

    /// Builds a mask lane-by-lane from a closure over the lane index.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        Self(array::from_fn(f))
    }

    /// Reads lane `index`, or `IndexOutOfRange` past the end.
    #[inline]
    pub fn test(&self, index: usize) -> Result<bool> {
        self.0
            .get(index)
            .copied()
            .ok_or_else(|| LaneError::index_out_of_range(index, N))
    }

    /// True if any lane is set.
    #[inline]
    pub fn any(&self) -> bool {
        self.0.iter().any(|&lane| lane)
    }

    /// True if every lane is set.
    #[inline]
    pub fn all(&self) -> bool {
        self.0.iter().all(|&lane| lane)
    }

    /// True if no lane is set.
    #[inline]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Number of set lanes.
    #[inline]
    pub fn count_true(&self) -> usize {
        self.0.iter().filter(|&&lane| lane).count()
    }

    /// Lane-wise choice: `if_true[i]` where lane `i` is set, else
    /// `if_false[i]`.
    #[inline]
    pub fn select<T>(self, if_true: Vector<T, N>, if_false: Vector<T, N>) -> Vector<T, N>
    where
        T: SimdElement,
    {
        Vector::from_fn(|i| if self.0[i] { if_true[i] } else { if_false[i] })
    }

    /// The lanes as a plain array.
    #[inline]
    pub const fn to_array(self) -> [bool; N] {
        self.0
    }

    /// Borrows the lanes as a plain array.
    #[inline]
    pub const fn as_array(&self) -> &[bool; N] {
        &self.0
    }
}

impl<const N: usize> Default for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<const N: usize> From<[bool; N]> for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn from(lanes: [bool; N]) -> Self {
        Self(lanes)
    }
}

/// Panicking lane read, like slice indexing. Use [`Mask::test`] for the
/// checked form.
impl<const N: usize> Index<usize> for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = bool;

    #[inline]
    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

impl<const N: usize> BitAnd for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] & rhs.0[i]))
    }
}

impl<const N: usize> BitOr for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] | rhs.0[i]))
    }
}

impl<const N: usize> BitXor for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }
}

impl<const N: usize> Not for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(array::from_fn(|i| !self.0[i]))
    }
}

impl<const N: usize> BitAndAssign for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<const N: usize> BitOrAssign for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<const N: usize> BitXorAssign for Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}
