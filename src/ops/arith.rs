//! Arithmetic: `+ - * /`, min/max, negate/abs, increment/decrement.
//!
//! Integer lanes wrap on overflow, matching the hardware instructions
//! these lower to. Integer division by a zero lane panics exactly as
//! scalar Rust does; float division follows IEEE-754 and yields
//! inf/NaN instead. The masked form divides only the selected lanes,
//! so a zero divisor under a false mask lane never panics.

use crate::element::{SimdElement, SimdFloat, SimdSigned};
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::mask::Mask;
use crate::vector::Vector;

lane_binary_ops! {
    Add::add / AddAssign::add_assign => add [SimdElement], masked_add, masked_add_assign;
    Sub::sub / SubAssign::sub_assign => sub [SimdElement], masked_sub, masked_sub_assign;
    Mul::mul / MulAssign::mul_assign => mul [SimdElement], masked_mul, masked_mul_assign;
    Div::div / DivAssign::div_assign => div [SimdElement];
}

impl<T, const N: usize> Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    /// Masked `div`: lanes deselected by `mask` keep `self`'s value.
    ///
    /// The divisor is applied on selected lanes only; deselected lanes
    /// are divided by one instead, so a masked-off zero divisor (or
    /// `MIN / -1`) cannot panic. A zero integer divisor on a *selected*
    /// lane still panics, exactly as the unmasked operator does.
    #[inline]
    pub fn masked_div(self, mask: Mask<N>, rhs: impl Into<Self>) -> Self {
        let divisor = mask.select(rhs.into(), Self::splat(T::one()));
        mask.select(self / divisor, self)
    }

    /// In-place [`masked_div`](Self::masked_div).
    #[inline]
    pub fn masked_div_assign(&mut self, mask: Mask<N>, rhs: impl Into<Self>) {
        *self = self.masked_div(mask, rhs);
    }
}

lane_binary_methods! {
    /// Lane-wise minimum (IEEE `min` for float lanes).
    min / min_assign => min [SimdElement], masked_min, masked_min_assign;
    /// Lane-wise maximum (IEEE `max` for float lanes).
    max / max_assign => max [SimdElement], masked_max, masked_max_assign;
}

impl<T, const N: usize> core::ops::Neg for Vector<T, N>
where
    T: SimdSigned,
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(crate::backend::active::neg(self.to_array()))
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: SimdSigned,
    LaneCount<N>: SupportedLaneCount,
{
    /// Lane-wise absolute value; wraps at the signed minimum, so
    /// `abs(MIN) == MIN`.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(crate::backend::active::abs(self.to_array()))
    }

    /// Masked negation: lanes deselected by `mask` keep `self`'s value.
    #[inline]
    pub fn masked_neg(self, mask: Mask<N>) -> Self {
        mask.select(-self, self)
    }

    /// In-place [`masked_neg`](Self::masked_neg).
    #[inline]
    pub fn masked_neg_assign(&mut self, mask: Mask<N>) {
        *self = self.masked_neg(mask);
    }

    /// Masked absolute value: lanes deselected by `mask` keep `self`'s
    /// value.
    #[inline]
    pub fn masked_abs(self, mask: Mask<N>) -> Self {
        mask.select(self.abs(), self)
    }

    /// In-place [`masked_abs`](Self::masked_abs).
    #[inline]
    pub fn masked_abs_assign(&mut self, mask: Mask<N>) {
        *self = self.masked_abs(mask);
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    /// Adds one to every lane; returns the incremented vector, so
    /// `*v.inc()` is the prefix form.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        *self = *self + Self::splat(T::one());
        self
    }

    /// Adds one to every lane; returns the value from before the
    /// increment (the postfix form).
    #[inline]
    pub fn inc_post(&mut self) -> Self {
        let before = *self;
        self.inc();
        before
    }

    /// Subtracts one from every lane; returns the decremented vector.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        *self = *self - Self::splat(T::one());
        self
    }

    /// Subtracts one from every lane; returns the value from before the
    /// decrement.
    #[inline]
    pub fn dec_post(&mut self) -> Self {
        let before = *self;
        self.dec();
        before
    }

    /// Adds one to the lanes selected by `mask`.
    #[inline]
    pub fn masked_inc(&mut self, mask: Mask<N>) -> &mut Self {
        self.masked_add_assign(mask, T::one());
        self
    }

    /// Adds one to the selected lanes; returns the pre-increment value.
    #[inline]
    pub fn masked_inc_post(&mut self, mask: Mask<N>) -> Self {
        let before = *self;
        self.masked_inc(mask);
        before
    }

    /// Subtracts one from the lanes selected by `mask`.
    #[inline]
    pub fn masked_dec(&mut self, mask: Mask<N>) -> &mut Self {
        self.masked_sub_assign(mask, T::one());
        self
    }

    /// Subtracts one from the selected lanes; returns the pre-decrement
    /// value.
    #[inline]
    pub fn masked_dec_post(&mut self, mask: Mask<N>) -> Self {
        let before = *self;
        self.masked_dec(mask);
        before
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: SimdFloat,
    LaneCount<N>: SupportedLaneCount,
{
    /// Lane-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::new(crate::backend::active::sqrt(self.to_array()))
    }

    /// Dot product: lane-wise multiply, then sum.
    #[inline]
    pub fn dot(self, rhs: impl Into<Self>) -> T {
        (self * rhs.into()).horizontal_sum()
    }
}
