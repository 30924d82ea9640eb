//! Horizontal reductions: folds across the lanes of one vector.
//!
//! Each reduction has four shapes: plain, seeded (`*_with`), masked, and
//! masked+seeded. The masked shapes fold the selected lanes only, by
//! filling deselected lanes with the operation's identity first; an
//! all-false mask therefore yields the identity (zero for sum, one for
//! product, all-ones for AND, type MAX/MIN for min/max).

use crate::element::{SimdElement, SimdInt};
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::mask::Mask;
use crate::vector::Vector;

lane_reductions! {
    /// Sum of all lanes. Integer sums wrap; accelerated float shapes may
    /// reassociate, so float results can differ from a left-to-right fold
    /// in the last bits.
    horizontal_sum / horizontal_sum_with / masked_horizontal_sum / masked_horizontal_sum_with
        => reduce_add [SimdElement], lane_add, T::zero();
    /// Product of all lanes (wrapping for integers).
    horizontal_product / horizontal_product_with / masked_horizontal_product / masked_horizontal_product_with
        => reduce_mul [SimdElement], lane_mul, T::one();
    /// Smallest lane (IEEE `min` semantics for floats).
    horizontal_min / horizontal_min_with / masked_horizontal_min / masked_horizontal_min_with
        => reduce_min [SimdElement], lane_min, T::max_value();
    /// Largest lane (IEEE `max` semantics for floats).
    horizontal_max / horizontal_max_with / masked_horizontal_max / masked_horizontal_max_with
        => reduce_max [SimdElement], lane_max, T::min_value();
    /// Bitwise AND of all lanes.
    horizontal_and / horizontal_and_with / masked_horizontal_and / masked_horizontal_and_with
        => reduce_and [SimdInt], lane_and, T::zero().lane_not();
    /// Bitwise OR of all lanes.
    horizontal_or / horizontal_or_with / masked_horizontal_or / masked_horizontal_or_with
        => reduce_or [SimdInt], lane_or, T::zero();
    /// Bitwise XOR of all lanes.
    horizontal_xor / horizontal_xor_with / masked_horizontal_xor / masked_horizontal_xor_with
        => reduce_xor [SimdInt], lane_xor, T::zero();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_shapes() {
        let v = Vector::new([2i32, 4, 6, 8]);
        assert_eq!(v.horizontal_sum(), 20);
        assert_eq!(v.horizontal_sum_with(5), 25);

        let ends = Mask::new([true, false, false, true]);
        assert_eq!(v.masked_horizontal_sum(ends), 10);
        assert_eq!(v.masked_horizontal_sum_with(ends, -10), 0);

        assert_eq!(v.masked_horizontal_sum(Mask::splat(false)), 0);
        assert_eq!(v.masked_horizontal_sum(Mask::splat(true)), 20);
    }

    #[test]
    fn test_product_shapes() {
        let v = Vector::new([1i32, 2, 3, 4]);
        assert_eq!(v.horizontal_product(), 24);
        assert_eq!(v.horizontal_product_with(10), 240);
        let m = Mask::new([false, true, true, false]);
        assert_eq!(v.masked_horizontal_product(m), 6);
        assert_eq!(v.masked_horizontal_product(Mask::splat(false)), 1);
    }

    #[test]
    fn test_min_max_shapes() {
        let v = Vector::new([3i32, -7, 12, 0]);
        assert_eq!(v.horizontal_min(), -7);
        assert_eq!(v.horizontal_max(), 12);
        assert_eq!(v.horizontal_min_with(-100), -100);
        assert_eq!(v.horizontal_max_with(100), 100);

        let m = Mask::new([true, false, false, true]);
        assert_eq!(v.masked_horizontal_min(m), 0);
        assert_eq!(v.masked_horizontal_max(m), 3);
        assert_eq!(v.masked_horizontal_min(Mask::splat(false)), i32::MAX);
        assert_eq!(v.masked_horizontal_max(Mask::splat(false)), i32::MIN);
    }

    #[test]
    fn test_bitwise_reductions() {
        let v = Vector::new([0b1110u8, 0b1101, 0b1011, 0b0111]);
        assert_eq!(v.horizontal_and(), 0);
        assert_eq!(v.horizontal_or(), 0b1111);
        assert_eq!(v.horizontal_xor(), 0b1011 ^ 0b0111 ^ 0b1110 ^ 0b1101);

        let m = Mask::new([true, true, false, false]);
        assert_eq!(v.masked_horizontal_and(m), 0b1100);
        assert_eq!(v.masked_horizontal_or(m), 0b1111);
        assert_eq!(v.masked_horizontal_xor(m), 0b0011);

        assert_eq!(v.masked_horizontal_and(Mask::splat(false)), 0xFF);
        assert_eq!(v.masked_horizontal_or(Mask::splat(false)), 0);
        assert_eq!(v.masked_horizontal_xor(Mask::splat(false)), 0);
    }

    #[test]
    fn test_float_sums_that_are_exact_in_any_order() {
        let v = Vector::new([0.5f32, 1.5, 2.5, 3.5, 0.5, 1.5, 2.5, 3.5]);
        assert_eq!(v.horizontal_sum(), 16.0);
        assert_eq!(v.horizontal_product(), (0.5f32 * 1.5 * 2.5 * 3.5).powi(2));

        let m = Mask::new([true, true, true, true, false, false, false, false]);
        assert_eq!(v.masked_horizontal_sum(m), 8.0);
    }

    #[test]
    fn test_wrapping_integer_sum() {
        let v = Vector::new([i32::MAX, 1]);
        assert_eq!(v.horizontal_sum(), i32::MIN);
    }
}
