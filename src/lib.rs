//! # Lanewise - Fixed-Width SIMD Vector Algebra
//!
//! Generic fixed-width SIMD vectors: one implementation of the whole
//! operation surface for every element type, lane count and backend.
//!
//! ## Overview
//!
//! - **One generic type**: [`Vector<T, N>`](Vector) covers the full
//!   register catalogue (ten element types, power-of-two lane counts up
//!   to 64) instead of one hand-written type per shape
//! - **Masked everything**: comparisons return a [`Mask`], and every
//!   elementwise operation has a `masked_*` form where deselected lanes
//!   keep their original value
//! - **Checked memory API**: slice-based aligned/unaligned loads and
//!   stores that return [`LaneError`] instead of trusting raw pointers
//! - **Three cast families, kept distinct**: `bitcast_*`
//!   (reinterpretation), `to_*` (value conversion), `widen`/`narrow`
//!   (element width)
//! - **Cross-width composition**: [`Packable`] splits and concatenates
//!   vectors without touching element width
//! - **Build-time backends**: the default `portable` backend lowers
//!   through the `wide` crate where a register shape matches; disabling
//!   it leaves the scalar reference backend. No runtime dispatch
//!
//! ## Quick Start
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let prices = Vector::new([4.0f32, 8.0, 15.0, 16.0]);
//! let discounted = prices * 0.5;
//! assert_eq!(discounted.to_array(), [2.0, 4.0, 7.5, 8.0]);
//!
//! // Comparisons produce masks; masked operations leave deselected
//! // lanes untouched.
//! let cheap = discounted.cmp_lt(5.0);
//! let bumped = discounted.masked_add(cheap, 100.0);
//! assert_eq!(bumped.to_array(), [102.0, 104.0, 7.5, 8.0]);
//!
//! // Horizontal reductions fold across lanes.
//! assert_eq!(prices.horizontal_sum(), 43.0);
//! assert_eq!(prices.masked_horizontal_sum(cheap), 12.0);
//! ```
//!
//! ## Loads, Stores and Masked Assignment
//!
//! ```rust
//! use lanewise::{Mask, Vector};
//!
//! // Short slices zero-fill; the checked loads return errors instead.
//! let mut v = Vector::<i32, 8>::load_or_zero(&[1, 2, 3]);
//! assert_eq!(v.to_array(), [1, 2, 3, 0, 0, 0, 0, 0]);
//!
//! let tail = Mask::from_fn(|i| i >= 3);
//! v.masked_assign(tail, Vector::splat(-1));
//! assert_eq!(v.to_array(), [1, 2, 3, -1, -1, -1, -1, -1]);
//!
//! let mut out = [0i32; 8];
//! v.store(&mut out).unwrap();
//! assert_eq!(out, v.to_array());
//! ```
//!
//! ## Changing Width
//!
//! ```rust
//! use lanewise::{Packable, Vector};
//!
//! // Lane-count composition: element width preserved.
//! let wide = Vector::new([1i16, 2, 3, 4, 5, 6, 7, 8]);
//! let (lo, hi) = wide.unpack();
//! assert_eq!(lo.to_array(), [1, 2, 3, 4]);
//! assert_eq!(Vector::<i16, 8>::pack(lo, hi), wide);
//!
//! // Element-width conversion: lane count preserved.
//! let widened = lo.widen();
//! assert_eq!(widened.to_array(), [1i32, 2, 3, 4]);
//! assert_eq!(widened.narrow(), lo);
//! ```
//!
//! ## Element Types and Lane Counts
//!
//! | Family | Elements | Extra operations |
//! |--------|----------|------------------|
//! | Signed integer | `i8 i16 i32 i64` | bitwise, shift, rotate, neg, abs |
//! | Unsigned integer | `u8 u16 u32 u64` | bitwise, shift, rotate |
//! | Float | `f32 f64` | neg, abs, sqrt, dot, fused multiply-add |
//!
//! Lane counts are the powers of two 1 through 64, gated by
//! [`SupportedLaneCount`] so an unsupported width fails to compile rather
//! than misbehave at runtime.
//!
//! ## Numeric Policy
//!
//! Lanes follow native Rust scalar semantics: integer arithmetic wraps,
//! integer division by zero panics, floats are IEEE-754, shift and rotate
//! counts are taken modulo the lane bit-width, and float→int `to_*`
//! conversions saturate. Masked shapes leave deselected lanes inert as
//! well as unwritten: masked division divides only the selected lanes,
//! so a mask can guard zero divisors.
//!
//! ## Module Overview
//!
//! - [`Vector`]: the vector type and its operation surface
//! - [`Mask`]: boolean lanes, queries and blending
//! - [`backend`]: build-time backend selection and [`backend::Isa`]
//! - [`Packable`]: half-width composition
//! - [`LaneError`]: the contract-violation error type

pub mod backend;

mod cast;
mod element;
mod error;
mod lanes;
mod mask;
mod memory;
mod ops;
mod pack;
mod vector;

pub use element::{Narrow, SimdElement, SimdFloat, SimdInt, SimdSigned, Widen};
pub use error::{LaneError, Result};
pub use lanes::{LaneCount, SupportedLaneCount};
pub use mask::Mask;
pub use memory::{align_up, is_aligned_to, MAX_ALIGNMENT};
pub use pack::Packable;
pub use vector::Vector;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::backend::{active_isa, Isa};
    pub use crate::element::{Narrow, SimdElement, SimdFloat, SimdInt, SimdSigned, Widen};
    pub use crate::error::{LaneError, Result};
    pub use crate::lanes::{LaneCount, SupportedLaneCount};
    pub use crate::mask::Mask;
    pub use crate::pack::Packable;
    pub use crate::vector::Vector;
}
