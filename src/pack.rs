//! Lane-count composition.
//!
//! [`Packable`] ties each even-width vector to the half-length vector of
//! the same element type: two halves concatenate into a whole
//! ([`pack`](Packable::pack)) and a whole splits back into halves
//! ([`unpack`](Packable::unpack)), with `pack(v.unpack_lo(),
//! v.unpack_hi()) == v` for every `v`. Element width is untouched; this
//! is how narrow register shapes compose into wider ones.

use crate::element::SimdElement;
use crate::vector::Vector;

/// Vectors that split into, and build from, two half-length vectors.
pub trait Packable: Sized {
    /// The half-length vector with the same element type.
    type Half;

    /// Concatenates two halves, `lo` in the low lanes, `hi` in the high.
    fn pack(lo: Self::Half, hi: Self::Half) -> Self;

    /// Splits into `(low half, high half)`.
    fn unpack(self) -> (Self::Half, Self::Half);

    /// The low-half lanes.
    fn unpack_lo(self) -> Self::Half;

    /// The high-half lanes.
    fn unpack_hi(self) -> Self::Half;

    /// Replaces the low-half lanes, leaving the high half alone.
    fn pack_lo(&mut self, half: Self::Half);

    /// Replaces the high-half lanes, leaving the low half alone.
    fn pack_hi(&mut self, half: Self::Half);
}

macro_rules! impl_packable {
    ($(($n:literal, $half:literal)),+ $(,)?) => {
        $(
            impl<T: SimdElement> Packable for Vector<T, $n> {
                type Half = Vector<T, $half>;

                #[inline]
                fn pack(lo: Vector<T, $half>, hi: Vector<T, $half>) -> Self {
                    let mut lanes = [T::zero(); $n];
                    lanes[..$half].copy_from_slice(lo.as_array());
                    lanes[$half..].copy_from_slice(hi.as_array());
                    Self::new(lanes)
                }

                #[inline]
                fn unpack(self) -> (Vector<T, $half>, Vector<T, $half>) {
                    (self.unpack_lo(), self.unpack_hi())
                }

                #[inline]
                fn unpack_lo(self) -> Vector<T, $half> {
                    Vector::from_fn(|i| self[i])
                }

                #[inline]
                fn unpack_hi(self) -> Vector<T, $half> {
                    Vector::from_fn(|i| self[$half + i])
                }

                #[inline]
                fn pack_lo(&mut self, half: Vector<T, $half>) {
                    self.as_mut_array()[..$half].copy_from_slice(half.as_array());
                }

                #[inline]
                fn pack_hi(&mut self, half: Vector<T, $half>) {
                    self.as_mut_array()[$half..].copy_from_slice(half.as_array());
                }
            }
        )+
    };
}

impl_packable!((2, 1), (4, 2), (8, 4), (16, 8), (32, 16), (64, 32));
