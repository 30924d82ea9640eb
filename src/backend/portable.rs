//! The portable accelerated backend.
//!
//! Built on the `wide` crate: each primitive first checks, at
//! monomorphization time, whether the call's (element, lane count) pair
//! matches a register shape `wide` provides, and lowers through that type
//! if so. The checks compare `TypeId`s and const lane counts, so every
//! branch folds to a constant and the unmatched paths compile out.
//!
//! Shapes with no `wide` counterpart, and operations where `wide`'s lane
//! semantics are not bit-identical to the reference table (float min/max
//! on NaN inputs, fused multiply-add), delegate to
//! [`scalar`](super::scalar).

use core::any::TypeId;
use core::mem::{size_of, transmute_copy};

use wide::{f32x4, f32x8, f64x2, f64x4, i16x8, i32x4, i32x8, u8x16};

use super::scalar;
use crate::element::{SimdElement, SimdFloat, SimdInt, SimdSigned};

pub(crate) use super::scalar::{
    cmp_eq, cmp_ge, cmp_gt, cmp_le, cmp_lt, cmp_ne, max, min, mul_add, mul_sub, neg, not,
    reduce_and, reduce_max, reduce_min, reduce_mul, reduce_or, reduce_xor, rotl, rotr, shl, shr,
};

#[inline(always)]
fn same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Reinterprets `A` as `B`. Only valid when `A` and `B` are the same
/// type; every call site gates on `same` plus a lane-count check.
#[inline(always)]
unsafe fn cast<A: Copy + 'static, B: Copy + 'static>(a: A) -> B {
    debug_assert_eq!(size_of::<A>(), size_of::<B>());
    transmute_copy(&a)
}

macro_rules! accel_binary {
    ($a:ident, $b:ident, $op:tt; $(($elem:ty, $n:literal, $reg:ty)),+ $(,)?) => {
        $(
            if same::<T, $elem>() && N == $n {
                let x = <$reg>::new(unsafe { cast($a) });
                let y = <$reg>::new(unsafe { cast($b) });
                return unsafe { cast((x $op y).to_array()) };
            }
        )+
    };
}

macro_rules! accel_unary {
    ($a:ident, $method:ident; $(($elem:ty, $n:literal, $reg:ty)),+ $(,)?) => {
        $(
            if same::<T, $elem>() && N == $n {
                let x = <$reg>::new(unsafe { cast($a) });
                return unsafe { cast(x.$method().to_array()) };
            }
        )+
    };
}

#[inline]
pub(crate) fn add<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    accel_binary!(a, b, +;
        (f32, 4, f32x4), (f32, 8, f32x8),
        (f64, 2, f64x2), (f64, 4, f64x4),
        (i32, 4, i32x4), (i32, 8, i32x8),
        (i16, 8, i16x8),
    );
    scalar::add(a, b)
}

#[inline]
pub(crate) fn sub<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    accel_binary!(a, b, -;
        (f32, 4, f32x4), (f32, 8, f32x8),
        (f64, 2, f64x2), (f64, 4, f64x4),
        (i32, 4, i32x4), (i32, 8, i32x8),
        (i16, 8, i16x8),
    );
    scalar::sub(a, b)
}

#[inline]
pub(crate) fn mul<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    accel_binary!(a, b, *;
        (f32, 4, f32x4), (f32, 8, f32x8),
        (f64, 2, f64x2), (f64, 4, f64x4),
        (i32, 4, i32x4), (i32, 8, i32x8),
        (i16, 8, i16x8),
    );
    scalar::mul(a, b)
}

#[inline]
pub(crate) fn div<T: SimdElement, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    accel_binary!(a, b, /;
        (f32, 4, f32x4), (f32, 8, f32x8),
        (f64, 2, f64x2), (f64, 4, f64x4),
    );
    scalar::div(a, b)
}

#[inline]
pub(crate) fn and<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    accel_binary!(a, b, &; (i32, 4, i32x4), (i32, 8, i32x8), (u8, 16, u8x16));
    scalar::and(a, b)
}

#[inline]
pub(crate) fn or<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    accel_binary!(a, b, |; (i32, 4, i32x4), (i32, 8, i32x8), (u8, 16, u8x16));
    scalar::or(a, b)
}

#[inline]
pub(crate) fn xor<T: SimdInt, const N: usize>(a: [T; N], b: [T; N]) -> [T; N] {
    accel_binary!(a, b, ^; (i32, 4, i32x4), (i32, 8, i32x8), (u8, 16, u8x16));
    scalar::xor(a, b)
}

#[inline]
pub(crate) fn sqrt<T: SimdFloat, const N: usize>(a: [T; N]) -> [T; N] {
    accel_unary!(a, sqrt;
        (f32, 4, f32x4), (f32, 8, f32x8),
        (f64, 2, f64x2), (f64, 4, f64x4),
    );
    scalar::sqrt(a)
}

#[inline]
pub(crate) fn abs<T: SimdSigned, const N: usize>(a: [T; N]) -> [T; N] {
    accel_unary!(a, abs; (f32, 8, f32x8));
    scalar::abs(a)
}

#[inline]
pub(crate) fn reduce_add<T: SimdElement, const N: usize>(a: [T; N]) -> T {
    if same::<T, f32>() && N == 8 {
        let x = f32x8::new(unsafe { cast(a) });
        return unsafe { cast(x.reduce_add()) };
    }
    if same::<T, i32>() && N == 8 {
        let x = i32x8::new(unsafe { cast(a) });
        return unsafe { cast(x.reduce_add()) };
    }
    scalar::reduce_add(a)
}
