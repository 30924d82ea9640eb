//! Slice load/store and the alignment contract.
//!
//! All memory traffic goes through checked slice operations; there are no
//! raw-pointer entry points. The unaligned family ([`Vector::load`],
//! [`Vector::store`]) only checks lengths. The aligned family additionally
//! demands the slice's base address be [`Vector::ALIGN`]-aligned and fails
//! with [`LaneError::AlignmentViolation`] otherwise, so a release build
//! never silently takes the unaligned path where the caller promised an
//! aligned one.

use crate::element::SimdElement;
use crate::error::{LaneError, Result};
use crate::lanes::{LaneCount, SupportedLaneCount};
use crate::mask::Mask;
use crate::vector::Vector;

/// Widest alignment any vector shape demands (512-bit registers).
pub const MAX_ALIGNMENT: usize = 64;

/// True if `ptr` is aligned to `align` bytes.
#[inline]
pub fn is_aligned_to<T>(ptr: *const T, align: usize) -> bool {
    ptr as usize % align == 0
}

/// Rounds `value` up to the next multiple of `align` (a power of two).
#[inline]
pub const fn align_up(value: usize, align: usize) -> usize {
    (value + align - 1) & !(align - 1)
}

/// Lanes a masked transfer must be able to touch: highest selected lane
/// plus one, zero for an empty mask.
fn required_lanes<const N: usize>(mask: &Mask<N>) -> usize
where
    LaneCount<N>: SupportedLaneCount,
{
    mask.as_array()
        .iter()
        .rposition(|&lane| lane)
        .map_or(0, |i| i + 1)
}

impl<T, const N: usize> Vector<T, N>
where
    T: SimdElement,
    LaneCount<N>: SupportedLaneCount,
{
    /// Loads the first `N` elements of `src`, any alignment.
    ///
    /// Fails with `LaneCountMismatch` if `src` holds fewer than `N`
    /// elements.
    #[inline]
    pub fn load(src: &[T]) -> Result<Self> {
        if src.len() < N {
            return Err(LaneError::lane_count_mismatch(N, src.len()));
        }
        let mut lanes = [T::zero(); N];
        lanes.copy_from_slice(&src[..N]);
        Ok(Self::new(lanes))
    }

    /// Loads the first `N` elements of `src`, whose base address must be
    /// [`ALIGN`](Self::ALIGN)-aligned.
    #[inline]
    pub fn load_aligned(src: &[T]) -> Result<Self> {
        if !is_aligned_to(src.as_ptr(), Self::ALIGN) {
            return Err(LaneError::alignment_violation(
                src.as_ptr() as usize,
                Self::ALIGN,
            ));
        }
        Self::load(src)
    }

    /// Loads up to `N` elements of `src`, zero-filling lanes past the end
    /// of a short slice. Never fails.
    #[inline]
    pub fn load_or_zero(src: &[T]) -> Self {
        let mut lanes = [T::zero(); N];
        let available = src.len().min(N);
        lanes[..available].copy_from_slice(&src[..available]);
        Self::new(lanes)
    }

    /// Loads the lanes selected by `mask` from their positions in `src`;
    /// deselected lanes keep the receiver's value.
    ///
    /// `src` only has to reach the highest selected lane, and nothing is
    /// read past it.
    pub fn masked_load(self, mask: Mask<N>, src: &[T]) -> Result<Self> {
        let required = required_lanes(&mask);
        if src.len() < required {
            return Err(LaneError::lane_count_mismatch(required, src.len()));
        }
        let mut lanes = self.to_array();
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask[i] {
                *lane = src[i];
            }
        }
        Ok(Self::new(lanes))
    }

    /// Stores all `N` lanes to the front of `dst`, any alignment.
    #[inline]
    pub fn store(&self, dst: &mut [T]) -> Result<()> {
        if dst.len() < N {
            return Err(LaneError::lane_count_mismatch(N, dst.len()));
        }
        dst[..N].copy_from_slice(self.as_array());
        Ok(())
    }

    /// Stores all `N` lanes to the front of `dst`, whose base address
    /// must be [`ALIGN`](Self::ALIGN)-aligned.
    #[inline]
    pub fn store_aligned(&self, dst: &mut [T]) -> Result<()> {
        if !is_aligned_to(dst.as_ptr(), Self::ALIGN) {
            return Err(LaneError::alignment_violation(
                dst.as_ptr() as usize,
                Self::ALIGN,
            ));
        }
        self.store(dst)
    }

    /// Stores the lanes selected by `mask` to their positions in `dst`;
    /// deselected positions keep their memory contents.
    ///
    /// Checked up front: a too-short `dst` fails before any lane is
    /// written.
    pub fn masked_store(&self, mask: Mask<N>, dst: &mut [T]) -> Result<()> {
        let required = required_lanes(&mask);
        if dst.len() < required {
            return Err(LaneError::lane_count_mismatch(required, dst.len()));
        }
        for (i, slot) in dst.iter_mut().take(N).enumerate() {
            if mask[i] {
                *slot = self[i];
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aligned_vec::{AVec, ConstAlign};

    fn aligned_buf(len: usize) -> AVec<f32, ConstAlign<64>> {
        let mut buf = AVec::new(64);
        for i in 0..len {
            buf.push(i as f32);
        }
        buf
    }

    #[test]
    fn test_load_store_round_trip() {
        let data = [5i32, 6, 7, 8, 9];
        let v = Vector::<i32, 4>::load(&data).unwrap();
        assert_eq!(v.to_array(), [5, 6, 7, 8], "reads exactly the first N");

        let mut out = [0i32; 5];
        v.store(&mut out).unwrap();
        assert_eq!(out, [5, 6, 7, 8, 0]);
    }

    #[test]
    fn test_short_slices_are_rejected() {
        let data = [1u8, 2, 3];
        assert_eq!(
            Vector::<u8, 4>::load(&data),
            Err(LaneError::LaneCountMismatch { expected: 4, actual: 3 })
        );
        let mut out = [0u8; 3];
        assert_eq!(
            Vector::<u8, 4>::splat(1).store(&mut out),
            Err(LaneError::LaneCountMismatch { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn test_load_or_zero_pads_the_tail() {
        let v = Vector::<i16, 8>::load_or_zero(&[1, 2, 3]);
        assert_eq!(v.to_array(), [1, 2, 3, 0, 0, 0, 0, 0]);
        assert_eq!(Vector::<i16, 8>::load_or_zero(&[]), Vector::zero());
    }

    #[test]
    fn test_aligned_round_trip() {
        let mut buf = aligned_buf(8);
        let v = Vector::<f32, 8>::load_aligned(&buf).unwrap();
        assert_eq!(v.to_array(), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

        (v + 1.0).store_aligned(&mut buf).unwrap();
        assert_eq!(&buf[..], [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_misaligned_base_is_rejected() {
        let buf = aligned_buf(10);
        // One element in from a 64-byte base cannot satisfy a 32-byte
        // alignment contract.
        match Vector::<f32, 8>::load_aligned(&buf[1..9]) {
            Err(LaneError::AlignmentViolation { required, .. }) => assert_eq!(required, 32),
            other => panic!("expected an alignment violation, got {other:?}"),
        }

        let mut out = aligned_buf(10);
        assert!(Vector::<f32, 8>::splat(0.0).store_aligned(&mut out[1..9]).is_err());
    }

    #[test]
    fn test_masked_load_keeps_deselected_lanes() {
        let v = Vector::new([100i32, 200, 300, 400]);
        let loaded = v
            .masked_load(Mask::new([true, false, true, false]), &[1, 2, 3])
            .unwrap();
        assert_eq!(loaded.to_array(), [1, 200, 3, 400]);
    }

    #[test]
    fn test_masked_transfers_reach_only_selected_lanes() {
        let v = Vector::new([1i32, 2, 3, 4]);
        // Highest selected lane is 1, so a 2-element slice suffices.
        let loaded = v.masked_load(Mask::new([true, true, false, false]), &[9, 8]).unwrap();
        assert_eq!(loaded.to_array(), [9, 8, 3, 4]);
        assert_eq!(
            v.masked_load(Mask::new([false, false, false, true]), &[9, 8]),
            Err(LaneError::LaneCountMismatch { expected: 4, actual: 2 })
        );

        let mut dst = [0i32; 2];
        v.masked_store(Mask::new([true, true, false, false]), &mut dst).unwrap();
        assert_eq!(dst, [1, 2]);
        assert!(v
            .masked_store(Mask::new([false, false, true, false]), &mut dst)
            .is_err());
        assert_eq!(dst, [1, 2], "failed store writes nothing");
    }

    #[test]
    fn test_masked_store_leaves_deselected_memory() {
        let v = Vector::new([9i32, 9, 9, 9]);
        let mut dst = [1i32, 2, 3, 4, 5];
        v.masked_store(Mask::new([false, true, false, true]), &mut dst).unwrap();
        assert_eq!(dst, [1, 9, 3, 9, 5]);
    }

    #[test]
    fn test_empty_mask_needs_no_data() {
        let v = Vector::<i32, 4>::splat(7);
        assert_eq!(v.masked_load(Mask::splat(false), &[]), Ok(v));
        let mut dst: [i32; 0] = [];
        assert_eq!(v.masked_store(Mask::splat(false), &mut dst), Ok(()));
    }

    #[test]
    fn test_alignment_helpers() {
        assert_eq!(align_up(0, 16), 0);
        assert_eq!(align_up(1, 16), 16);
        assert_eq!(align_up(16, 16), 16);
        assert_eq!(align_up(17, 64), 64);
        let buf = aligned_buf(4);
        assert!(is_aligned_to(buf.as_ptr(), MAX_ALIGNMENT));
    }
}
