//! Bitwise ops, shifts and rotates. Integer lanes only.
//!
//! Shift and rotate counts are taken per lane from the right-hand side
//! and masked modulo the lane bit-width, the way the hardware
//! instructions treat their count operands. Right shift is arithmetic on
//! signed lanes and logical on unsigned ones.

use crate::element::SimdInt;
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::mask::Mask;
use crate::vector::Vector;

lane_binary_ops! {
    BitAnd::bitand / BitAndAssign::bitand_assign => and [SimdInt], masked_bitand, masked_bitand_assign;
    BitOr::bitor / BitOrAssign::bitor_assign => or [SimdInt], masked_bitor, masked_bitor_assign;
    BitXor::bitxor / BitXorAssign::bitxor_assign => xor [SimdInt], masked_bitxor, masked_bitxor_assign;
    Shl::shl / ShlAssign::shl_assign => shl [SimdInt], masked_shl, masked_shl_assign;
    Shr::shr / ShrAssign::shr_assign => shr [SimdInt], masked_shr, masked_shr_assign;
}

lane_binary_methods! {
    /// Lane-wise rotate left; counts are taken modulo the lane bit-width.
    rotl / rotl_assign => rotl [SimdInt], masked_rotl, masked_rotl_assign;
    /// Lane-wise rotate right; counts are taken modulo the lane bit-width.
    rotr / rotr_assign => rotr [SimdInt], masked_rotr, masked_rotr_assign;
}

impl<T, const N: usize> core::ops::Not for Vector<T, N>
where
    T: SimdInt,
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::new(crate::backend::active::not(self.to_array()))
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: SimdInt,
    LaneCount<N>: SupportedLaneCount,
{
    /// Masked complement: lanes deselected by `mask` keep `self`'s value.
    #[inline]
    pub fn masked_not(self, mask: Mask<N>) -> Self {
        mask.select(!self, self)
    }

    /// In-place [`masked_not`](Self::masked_not).
    #[inline]
    pub fn masked_not_assign(&mut self, mask: Mask<N>) {
        *self = self.masked_not(mask);
    }
}
