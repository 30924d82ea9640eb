//! Fused ternary operations.
//!
//! `mul_add` and `mul_sub` go through the element contract's fused lane
//! primitive, so float lanes round once, on every backend. `add_mul` and
//! `sub_mul` have no fused hardware counterpart and are the two-step
//! composition they look like.

use crate::element::SimdElement;
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::mask::Mask;
use crate::vector::Vector;

impl<T, const N: usize> Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    /// `(self * b) + c` per lane, with a single rounding step for float
    /// lanes. Integer lanes wrap at both steps.
    #[inline]
    pub fn mul_add(self, b: impl Into<Self>, c: impl Into<Self>) -> Self {
        Self::new(crate::backend::active::mul_add(
            self.to_array(),
            b.into().to_array(),
            c.into().to_array(),
        ))
    }

    /// `(self * b) - c` per lane, with a single rounding step for float
    /// lanes.
    #[inline]
    pub fn mul_sub(self, b: impl Into<Self>, c: impl Into<Self>) -> Self {
        Self::new(crate::backend::active::mul_sub(
            self.to_array(),
            b.into().to_array(),
            c.into().to_array(),
        ))
    }

    /// `(self + b) * c` per lane. Two rounding steps for float lanes.
    #[inline]
    pub fn add_mul(self, b: impl Into<Self>, c: impl Into<Self>) -> Self {
        (self + b.into()) * c.into()
    }

    /// `(self - b) * c` per lane. Two rounding steps for float lanes.
    #[inline]
    pub fn sub_mul(self, b: impl Into<Self>, c: impl Into<Self>) -> Self {
        (self - b.into()) * c.into()
    }

    /// Masked [`mul_add`](Self::mul_add): deselected lanes keep `self`'s
    /// value.
    #[inline]
    pub fn masked_mul_add(self, mask: Mask<N>, b: impl Into<Self>, c: impl Into<Self>) -> Self {
        mask.select(self.mul_add(b, c), self)
    }

    /// Masked [`mul_sub`](Self::mul_sub): deselected lanes keep `self`'s
    /// value.
    #[inline]
    pub fn masked_mul_sub(self, mask: Mask<N>, b: impl Into<Self>, c: impl Into<Self>) -> Self {
        mask.select(self.mul_sub(b, c), self)
    }

    /// Masked [`add_mul`](Self::add_mul): deselected lanes keep `self`'s
    /// value.
    #[inline]
    pub fn masked_add_mul(self, mask: Mask<N>, b: impl Into<Self>, c: impl Into<Self>) -> Self {
        mask.select(self.add_mul(b, c), self)
    }

    /// Masked [`sub_mul`](Self::sub_mul): deselected lanes keep `self`'s
    /// value.
    #[inline]
    pub fn masked_sub_mul(self, mask: Mask<N>, b: impl Into<Self>, c: impl Into<Self>) -> Self {
        mask.select(self.sub_mul(b, c), self)
    }
}
