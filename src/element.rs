//! The sealed scalar contract.
//!
//! Every backend must agree on what one lane of each element type does;
//! these traits pin that down once, in terms of Rust's native scalar
//! semantics: integer lanes wrap, float lanes follow IEEE-754, shift and
//! rotate counts are taken modulo the lane bit-width, and integer division
//! by zero panics exactly as scalar Rust does.
//!
//! The trait hierarchy mirrors capability, not inheritance depth:
//! [`SimdElement`] is what every lane supports, [`SimdInt`] adds the
//! bitwise/shift/rotate family, [`SimdSigned`] adds negate and absolute
//! value (signed integers *and* floats), and [`SimdFloat`] adds the
//! float-only surface. [`Widen`] and [`Narrow`] tie each element to its
//! double- and half-width counterpart for lane-count-preserving
//! conversions.

use core::fmt::Debug;
use num_traits::{Bounded, One, Zero};

mod sealed {
    pub trait Sealed {}
}
use sealed::Sealed;

/// Scalar types that can populate vector lanes.
///
/// Sealed: exactly i8–i64, u8–u64, f32 and f64.
pub trait SimdElement:
    Sealed
    + Copy
    + Clone
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Bounded
    + Send
    + Sync
    + 'static
{
    /// Lane addition (wrapping for integers).
    fn lane_add(self, rhs: Self) -> Self;
    /// Lane subtraction (wrapping for integers).
    fn lane_sub(self, rhs: Self) -> Self;
    /// Lane multiplication (wrapping for integers).
    fn lane_mul(self, rhs: Self) -> Self;
    /// Lane division. Integer division by zero panics, floats produce
    /// inf/NaN; both are the platform's native behavior, not errors.
    fn lane_div(self, rhs: Self) -> Self;
    /// Lane minimum (IEEE `min` for floats).
    fn lane_min(self, rhs: Self) -> Self;
    /// Lane maximum (IEEE `max` for floats).
    fn lane_max(self, rhs: Self) -> Self;
    /// Fused `(self * b) + c`; a single rounding step for floats.
    fn lane_mul_add(self, b: Self, c: Self) -> Self;
    /// Fused `(self * b) - c`; a single rounding step for floats.
    fn lane_mul_sub(self, b: Self, c: Self) -> Self;
}

/// Integer elements: the bitwise, shift and rotate surface.
pub trait SimdInt: SimdElement {
    fn lane_and(self, rhs: Self) -> Self;
    fn lane_or(self, rhs: Self) -> Self;
    fn lane_xor(self, rhs: Self) -> Self;
    fn lane_not(self) -> Self;
    /// Left shift by `rhs` interpreted as a count; counts are masked
    /// modulo the lane bit-width, matching hardware shift semantics.
    fn lane_shl(self, rhs: Self) -> Self;
    /// Right shift: arithmetic for signed lanes, logical for unsigned.
    fn lane_shr(self, rhs: Self) -> Self;
    fn lane_rotl(self, rhs: Self) -> Self;
    fn lane_rotr(self, rhs: Self) -> Self;
    /// Reinterpret a lane value as a shift/rotate count.
    fn shift_amount(self) -> u32;
}

/// Elements with a sign: signed integers and floats.
pub trait SimdSigned: SimdElement {
    /// Lane negation (wrapping for integers, so `i32::MIN` stays put).
    fn lane_neg(self) -> Self;
    /// Lane absolute value (wrapping for integers).
    fn lane_abs(self) -> Self;
}

/// Float elements.
pub trait SimdFloat: SimdSigned {
    fn lane_sqrt(self) -> Self;
}

/// Elements with a double-width counterpart.
pub trait Widen: SimdElement {
    /// The double-width element: sign-extension target for signed
    /// integers, zero-extension for unsigned, f64 for f32.
    type Wider: SimdElement + Narrow<Narrower = Self>;
    fn widen(self) -> Self::Wider;
}

/// Elements with a half-width counterpart.
pub trait Narrow: SimdElement {
    /// The half-width element. Narrowing keeps the low bits of integers
    /// and rounds f64 to f32; precision loss is expected, not an error.
    type Narrower: SimdElement;
    fn narrow(self) -> Self::Narrower;
}

macro_rules! impl_int_element {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Sealed for $t {}

            impl SimdElement for $t {
                #[inline]
                fn lane_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
                #[inline]
                fn lane_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }
                #[inline]
                fn lane_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
                #[inline]
                fn lane_div(self, rhs: Self) -> Self {
                    self / rhs
                }
                #[inline]
                fn lane_min(self, rhs: Self) -> Self {
                    Ord::min(self, rhs)
                }
                #[inline]
                fn lane_max(self, rhs: Self) -> Self {
                    Ord::max(self, rhs)
                }
                #[inline]
                fn lane_mul_add(self, b: Self, c: Self) -> Self {
                    self.wrapping_mul(b).wrapping_add(c)
                }
                #[inline]
                fn lane_mul_sub(self, b: Self, c: Self) -> Self {
                    self.wrapping_mul(b).wrapping_sub(c)
                }
            }

            impl SimdInt for $t {
                #[inline]
                fn lane_and(self, rhs: Self) -> Self {
                    self & rhs
                }
                #[inline]
                fn lane_or(self, rhs: Self) -> Self {
                    self | rhs
                }
                #[inline]
                fn lane_xor(self, rhs: Self) -> Self {
                    self ^ rhs
                }
                #[inline]
                fn lane_not(self) -> Self {
                    !self
                }
                #[inline]
                fn lane_shl(self, rhs: Self) -> Self {
                    self.wrapping_shl(rhs.shift_amount())
                }
                #[inline]
                fn lane_shr(self, rhs: Self) -> Self {
                    self.wrapping_shr(rhs.shift_amount())
                }
                #[inline]
                fn lane_rotl(self, rhs: Self) -> Self {
                    self.rotate_left(rhs.shift_amount())
                }
                #[inline]
                fn lane_rotr(self, rhs: Self) -> Self {
                    self.rotate_right(rhs.shift_amount())
                }
                #[inline]
                fn shift_amount(self) -> u32 {
                    self as u32
                }
            }
        )+
    };
}

impl_int_element!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_signed_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl SimdSigned for $t {
                #[inline]
                fn lane_neg(self) -> Self {
                    self.wrapping_neg()
                }
                #[inline]
                fn lane_abs(self) -> Self {
                    self.wrapping_abs()
                }
            }
        )+
    };
}

impl_signed_int!(i8, i16, i32, i64);

macro_rules! impl_float_element {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Sealed for $t {}

            impl SimdElement for $t {
                #[inline]
                fn lane_add(self, rhs: Self) -> Self {
                    self + rhs
                }
                #[inline]
                fn lane_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
                #[inline]
                fn lane_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
                #[inline]
                fn lane_div(self, rhs: Self) -> Self {
                    self / rhs
                }
                #[inline]
                fn lane_min(self, rhs: Self) -> Self {
                    self.min(rhs)
                }
                #[inline]
                fn lane_max(self, rhs: Self) -> Self {
                    self.max(rhs)
                }
                #[inline]
                fn lane_mul_add(self, b: Self, c: Self) -> Self {
                    self.mul_add(b, c)
                }
                #[inline]
                fn lane_mul_sub(self, b: Self, c: Self) -> Self {
                    self.mul_add(b, -c)
                }
            }

            impl SimdSigned for $t {
                #[inline]
                fn lane_neg(self) -> Self {
                    -self
                }
                #[inline]
                fn lane_abs(self) -> Self {
                    self.abs()
                }
            }

            impl SimdFloat for $t {
                #[inline]
                fn lane_sqrt(self) -> Self {
                    self.sqrt()
                }
            }
        )+
    };
}

impl_float_element!(f32, f64);

macro_rules! impl_widen_narrow {
    ($($narrow:ty => $wide:ty),+ $(,)?) => {
        $(
            impl Widen for $narrow {
                type Wider = $wide;
                #[inline]
                fn widen(self) -> $wide {
                    self as $wide
                }
            }

            impl Narrow for $wide {
                type Narrower = $narrow;
                #[inline]
                fn narrow(self) -> $narrow {
                    self as $narrow
                }
            }
        )+
    };
}

impl_widen_narrow!(
    i8 => i16,
    i16 => i32,
    i32 => i64,
    u8 => u16,
    u16 => u32,
    u32 => u64,
    f32 => f64,
);
