//! Lane-wise comparisons.
//!
//! Each comparison yields a [`Mask`], one boolean per lane, following the
//! element type's `PartialOrd`: NaN lanes compare false under everything
//! but `cmp_ne`. Whole-vector equality is the separate `==` operator on
//! [`Vector`] itself (all lanes equal), not a lane-wise operation.

use crate::element::SimdElement;
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::mask::Mask;
use crate::vector::Vector;

impl<T, const N: usize> Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    /// Lane-wise `==`.
    #[inline]
    pub fn cmp_eq(self, rhs: impl Into<Self>) -> Mask<N> {
        Mask::new(crate::backend::active::cmp_eq(
            self.to_array(),
            rhs.into().to_array(),
        ))
    }

    /// Lane-wise `!=`.
    #[inline]
    pub fn cmp_ne(self, rhs: impl Into<Self>) -> Mask<N> {
        Mask::new(crate::backend::active::cmp_ne(
            self.to_array(),
            rhs.into().to_array(),
        ))
    }

    /// Lane-wise `<`.
    #[inline]
    pub fn cmp_lt(self, rhs: impl Into<Self>) -> Mask<N> {
        Mask::new(crate::backend::active::cmp_lt(
            self.to_array(),
            rhs.into().to_array(),
        ))
    }

    /// Lane-wise `<=`.
    #[inline]
    pub fn cmp_le(self, rhs: impl Into<Self>) -> Mask<N> {
        Mask::new(crate::backend::active::cmp_le(
            self.to_array(),
            rhs.into().to_array(),
        ))
    }

    /// Lane-wise `>`.
    #[inline]
    pub fn cmp_gt(self, rhs: impl Into<Self>) -> Mask<N> {
        Mask::new(crate::backend::active::cmp_gt(
            self.to_array(),
            rhs.into().to_array(),
        ))
    }

    /// Lane-wise `>=`.
    #[inline]
    pub fn cmp_ge(self, rhs: impl Into<Self>) -> Mask<N> {
        Mask::new(crate::backend::active::cmp_ge(
            self.to_array(),
            rhs.into().to_array(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_comparison() {
        let v = Vector::new([1i32, 2, 3, 4]);
        let w = Vector::new([3i32, 2, 1, 4]);
        assert_eq!(v.cmp_eq(w), Mask::new([false, true, false, true]));
        assert_eq!(v.cmp_ne(w), Mask::new([true, false, true, false]));
        assert_eq!(v.cmp_lt(w), Mask::new([true, false, false, false]));
        assert_eq!(v.cmp_le(w), Mask::new([true, true, false, true]));
        assert_eq!(v.cmp_gt(w), Mask::new([false, false, true, false]));
        assert_eq!(v.cmp_ge(w), Mask::new([false, true, true, true]));

        assert_eq!(v.cmp_gt(2), Mask::new([false, false, true, true]));
    }

    #[test]
    fn test_complement_laws_for_total_orders() {
        let v = Vector::new([5i32, -1, 0, 7]);
        let w = Vector::new([4i32, -1, 3, 7]);
        assert_eq!(v.cmp_ne(w), !v.cmp_eq(w));
        assert_eq!(v.cmp_ge(w), !v.cmp_lt(w));
        assert_eq!(v.cmp_le(w), !v.cmp_gt(w));
    }

    #[test]
    fn test_nan_lanes_compare_false() {
        let v = Vector::new([f32::NAN, 1.0]);
        let w = Vector::new([f32::NAN, f32::NAN]);
        assert_eq!(v.cmp_eq(w), Mask::new([false, false]));
        assert_eq!(v.cmp_lt(w), Mask::new([false, false]));
        assert_eq!(v.cmp_ge(w), Mask::new([false, false]));
        assert_eq!(v.cmp_ne(w), Mask::new([true, true]));
    }

    #[test]
    fn test_comparison_feeds_masked_ops() {
        let mut v = Vector::new([3i32, 8, 1, 9]);
        let too_big = v.cmp_gt(5);
        v.masked_assign(too_big, 5);
        assert_eq!(v.to_array(), [3, 5, 1, 5]);
    }
}
