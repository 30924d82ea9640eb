//! The generic fixed-width vector type.
//!
//! [`Vector<T, N>`] wraps `[T; N]` and carries the whole elementwise
//! operation surface: the std arithmetic/bitwise operator traits, the
//! `masked_*` family, comparisons returning [`Mask<N>`], horizontal
//! reductions, and the cast/pack conversions. The element type ranges over
//! the sealed [`SimdElement`] set and the lane count over the supported
//! powers of two; every (type, width) register shape is one instantiation
//! of the same generic code.

use core::array;
use core::ops::{Index, IndexMut};

use crate::element::SimdElement;
use crate::error::{LaneError, Result};
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::mask::Mask;
use crate::memory::MAX_ALIGNMENT;

/// Natural register alignment for a vector's total byte width: the lane
/// alignment doubled until it covers the register, capped at
/// [`MAX_ALIGNMENT`].
const fn natural_alignment(total_bytes: usize, lane_align: usize) -> usize {
    let mut align = lane_align;
    while align < total_bytes && align < MAX_ALIGNMENT {
        align *= 2;
    }
    align
}

/// `N` lanes of element type `T`, operated on as one value.
///
/// A plain `Copy` value with no interior state; all operations are
/// lane-wise unless named `horizontal_*`. Construct one with
/// [`new`](Self::new), [`splat`](Self::splat) or the load family, and get
/// the lanes back out with [`to_array`](Self::to_array) or the store
/// family.
///
/// ```
/// use lanewise::Vector;
///
/// let v = Vector::new([1.0f32, 2.0, 3.0, 4.0]);
/// let w = v * 2.0 + 1.0;
/// assert_eq!(w.to_array(), [3.0, 5.0, 7.0, 9.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N])
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount;

impl<T, const N: usize> Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    /// Number of lanes.
    pub const LANES: usize = N;

    /// The alignment the `*_aligned` load/store family demands of its
    /// buffers: 16 bytes for a 128-bit shape, 32 for 256-bit, 64 for
    /// 512-bit and up, never less than the element's own alignment.
    ///
    /// Instances themselves are only element-aligned; `ALIGN` is a
    /// contract on caller-supplied memory, not on the type's layout.
    pub const ALIGN: usize = natural_alignment(core::mem::size_of::<T>() * N, core::mem::align_of::<T>());

    /// Builds a vector from explicit lane values.
    #[inline]
    pub const fn new(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// Builds a vector with every lane set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// The all-zeros vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Builds a vector lane-by-lane from a closure over the lane index.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    /// Number of lanes, as a method for generic call sites.
    #[inline]
    pub const fn lanes(&self) -> usize {
        N
    }

    /// Alignment required by the `*_aligned` memory operations.
    #[inline]
    pub const fn alignment(&self) -> usize {
        Self::ALIGN
    }

    /// The lanes as a plain array.
    #[inline]
    pub const fn to_array(self) -> [T; N] {
        self.0
    }

    /// Borrows the lanes as a plain array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the lanes as a plain array.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Reads lane `index`, or `IndexOutOfRange` past the end.
    #[inline]
    pub fn extract(&self, index: usize) -> Result<T> {
        self.0
            .get(index)
            .copied()
            .ok_or_else(|| LaneError::index_out_of_range(index, N))
    }

    /// Writes lane `index`. Chainable:
    /// `v.insert(0, x)?.insert(1, y)?`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut Self> {
        match self.0.get_mut(index) {
            Some(lane) => {
                *lane = value;
                Ok(self)
            }
            None => Err(LaneError::index_out_of_range(index, N)),
        }
    }

    /// Overwrites the lanes selected by `mask` with the corresponding
    /// lanes of `rhs`; deselected lanes keep their value.
    #[inline]
    pub fn masked_assign(&mut self, mask: Mask<N>, rhs: impl Into<Self>) {
        *self = mask.select(rhs.into(), *self);
    }

    /// Gathers lanes by index: lane `i` of the result is lane
    /// `indices[i]` of `self`. Fails on any index past the lane count.
    pub fn swizzle(&self, indices: &[usize; N]) -> Result<Self> {
        let mut lanes = [T::zero(); N];
        for (lane, &src) in lanes.iter_mut().zip(indices.iter()) {
            *lane = self.extract(src)?;
        }
        Ok(Self(lanes))
    }

    /// The lanes in reverse order.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::from_fn(|i| self.0[N - 1 - i])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn from(lanes: [T; N]) -> Self {
        Self(lanes)
    }
}

/// Scalar broadcast: `Vector::from(x)` is `Vector::splat(x)`. This is the
/// conversion behind the `impl Into<Self>` right-hand sides, which lets
/// every masked and inherent operation accept a bare scalar.
impl<T, const N: usize> From<T> for Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

/// Panicking lane read, like slice indexing. Use
/// [`extract`](Vector::extract) for the checked form.
impl<T, const N: usize> Index<usize> for Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

/// Panicking lane write, like slice indexing. Use
/// [`insert`](Vector::insert) for the checked form.
impl<T, const N: usize> IndexMut<usize> for Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}
