//! Conversions between element families.
//!
//! Three distinct families, never to be conflated:
//!
//! - `bitcast_*` reinterprets lane bits between same-width types and
//!   preserves every bit; it never converts values.
//! - `to_*` converts lane values with Rust `as`-cast semantics: exact
//!   where the value fits, float→int truncates toward zero and saturates
//!   at the target's range (NaN becomes zero), int→float rounds to
//!   nearest.
//! - [`widen`](Vector::widen) / [`narrow`](Vector::narrow) move each lane
//!   to its double- or half-width element, keeping the lane count:
//!   sign-extend signed, zero-extend unsigned, f32↔f64. Narrowing keeps
//!   integer low bits and rounds f64 to f32; the precision loss is
//!   silent.

use crate::element::{Narrow, Widen};
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::vector::Vector;

impl<T, const N: usize> Vector<T, N>
where
    T: Widen,
    LaneCount<N>: SupportedLaneCount,
{
    /// Widens every lane to the double-width element type.
    ///
    /// Exact for every input. `widen(narrow(v)) == v` whenever each lane
    /// of `v` fits the narrow type.
    #[inline]
    pub fn widen(self) -> Vector<T::Wider, N> {
        Vector::from_fn(|i| self[i].widen())
    }
}

impl<T, const N: usize> Vector<T, N>
where
    T: Narrow,
    LaneCount<N>: SupportedLaneCount,
{
    /// Narrows every lane to the half-width element type, keeping the low
    /// bits of integer lanes and rounding f64 lanes to f32.
    #[inline]
    pub fn narrow(self) -> Vector<T::Narrower, N> {
        Vector::from_fn(|i| self[i].narrow())
    }
}

macro_rules! impl_bitcast {
    ($($src:ty, $method:ident, $dst:ty, |$lane:ident| $conv:expr;)+) => {
        $(
            impl<const N: usize> Vector<$src, N>
            where
                LaneCount<N>: SupportedLaneCount,
            {
                #[doc = concat!(
                    "Reinterprets each lane's bits as `", stringify!($dst),
                    "`. Bit-preserving, not value-converting."
                )]
                #[inline]
                pub fn $method(self) -> Vector<$dst, N> {
                    Vector::from_fn(|i| {
                        let $lane = self[i];
                        $conv
                    })
                }
            }
        )+
    };
}

impl_bitcast! {
    i8, bitcast_u8, u8, |lane| lane as u8;
    u8, bitcast_i8, i8, |lane| lane as i8;
    i16, bitcast_u16, u16, |lane| lane as u16;
    u16, bitcast_i16, i16, |lane| lane as i16;
    i32, bitcast_u32, u32, |lane| lane as u32;
    i32, bitcast_f32, f32, |lane| f32::from_bits(lane as u32);
    u32, bitcast_i32, i32, |lane| lane as i32;
    u32, bitcast_f32, f32, |lane| f32::from_bits(lane);
    f32, bitcast_i32, i32, |lane| lane.to_bits() as i32;
    f32, bitcast_u32, u32, |lane| lane.to_bits();
    i64, bitcast_u64, u64, |lane| lane as u64;
    i64, bitcast_f64, f64, |lane| f64::from_bits(lane as u64);
    u64, bitcast_i64, i64, |lane| lane as i64;
    u64, bitcast_f64, f64, |lane| f64::from_bits(lane);
    f64, bitcast_i64, i64, |lane| lane.to_bits() as i64;
    f64, bitcast_u64, u64, |lane| lane.to_bits();
}

macro_rules! impl_convert {
    ($($src:ty, $method:ident, $dst:ty;)+) => {
        $(
            impl<const N: usize> Vector<$src, N>
            where
                LaneCount<N>: SupportedLaneCount,
            {
                #[doc = concat!(
                    "Converts each lane's value to `", stringify!($dst),
                    "` with `as`-cast semantics."
                )]
                #[inline]
                pub fn $method(self) -> Vector<$dst, N> {
                    Vector::from_fn(|i| self[i] as $dst)
                }
            }
        )+
    };
}

impl_convert! {
    f32, to_i32, i32;
    f32, to_u32, u32;
    f32, to_f64, f64;
    f64, to_i64, i64;
    f64, to_u64, u64;
    f64, to_f32, f32;
    i32, to_f32, f32;
    i32, to_f64, f64;
    u32, to_f32, f32;
    u32, to_f64, f64;
    i64, to_f64, f64;
    u64, to_f64, f64;
}
