//! The scalar reference backend.
//!
//! Every primitive is a plain loop over the lanes, written against the
//! element contract in [`crate::element`]. This table defines the
//! semantics; an accelerated backend is correct exactly when it matches
//! these functions lane for lane (float horizontal reductions excepted,
//! which may reassociate).

use core::array;

use crate::element::{SimdElement, SimdFloat, SimdInt, SimdSigned};

#[inline]
pub(crate) fn add<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_add(b[i]))
}

#[inline]
pub(crate) fn sub<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_sub(b[i]))
}

#[inline]
pub(crate) fn mul<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_mul(b[i]))
}

#[inline]
pub(crate) fn div<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_div(b[i]))
}

#[inline]
pub(crate) fn min<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_min(b[i]))
}

#[inline]
pub(crate) fn max<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_max(b[i]))
}

#[inline]
pub(crate) fn and<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_and(b[i]))
}

#[inline]
pub(crate) fn or<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_or(b[i]))
}

#[inline]
pub(crate) fn xor<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_xor(b[i]))
}

#[inline]
pub(crate) fn shl<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_shl(b[i]))
}

#[inline]
pub(crate) fn shr<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_shr(b[i]))
}

#[inline]
pub(crate) fn rotl<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_rotl(b[i]))
}

#[inline]
pub(crate) fn rotr<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_rotr(b[i]))
}

#[inline]
pub(crate) fn neg<T: SimdSigned, const N: usize>(a: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_neg())
}

#[inline]
pub(crate) fn abs<T: SimdSigned, const N: usize>(a: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_abs())
}

#[inline]
pub(crate) fn not<T: SimdInt, const N: usize>(a: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_not())
}

#[inline]
pub(crate) fn sqrt<T: SimdFloat, const N: usize>(a: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_sqrt())
}

#[inline]
pub(crate) fn mul_add<T: SimdElement, const N: usize>(a: [T; N], b: [T; N], c: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_mul_add(b[i], c[i]))
}

#[inline]
pub(crate) fn mul_sub<T: SimdElement, const N: usize>(a: [T; N], b: [T; N], c: [T; N]) -> [T; N] {
    array::from_fn(|i| a[i].lane_mul_sub(b[i], c[i]))
}

#[inline]
pub(crate) fn cmp_eq<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [bool; N] {
    array::from_fn(|i| a[i] == b[i])
}

#[inline]
pub(crate) fn cmp_ne<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [bool; N] {
    array::from_fn(|i| a[i] != b[i])
}

#[inline]
pub(crate) fn cmp_lt<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [bool; N] {
    array::from_fn(|i| a[i] < b[i])
}

#[inline]
pub(crate) fn cmp_le<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [bool; N] {
    array::from_fn(|i| a[i] <= b[i])
}

#[inline]
pub(crate) fn cmp_gt<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [bool; N] {
    array::from_fn(|i| a[i] > b[i])
}

#[inline]
pub(crate) fn cmp_ge<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [bool; N] {
    array::from_fn(|i| a[i] >= b[i])
}

/// Left-to-right fold from the first lane.
macro_rules! impl_reduce {
    ($($name:ident: $bound:ident, $lane_op:ident;)+) => {
        $(
            #[inline]
            pub(crate) fn $name<T: $bound, const N: usize>(a: [T; N]) -> T {
                let mut acc = a[0];
                for &lane in &a[1..] {
                    acc = acc.$lane_op(lane);
                }
                acc
            }
        )+
    };
}

impl_reduce! {
    reduce_add: SimdElement, lane_add;
    reduce_mul: SimdElement, lane_mul;
    reduce_min: SimdElement, lane_min;
    reduce_max: SimdElement, lane_max;
    reduce_and: SimdInt, lane_and;
    reduce_or: SimdInt, lane_or;
    reduce_xor: SimdInt, lane_xor;
}
