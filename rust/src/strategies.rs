//! The copy strategies under test
//!
//! Every strategy is a free function with the same contract: `src` and `dst`
//! are disjoint views of equal length, and after the call `dst` is
//! byte-identical to `src`. Overwriting `dst` is the only side effect; the
//! source is never touched. The [`Strategy`] enum maps a strategy identifier
//! to its function so the measurement driver can select one per timed call.

use std::os::raw::c_void;
use std::ptr;

const WORD: usize = std::mem::size_of::<u64>();

/// Bulk copy via the platform copy intrinsic.
///
/// `copy_from_slice` lowers to the compiler's memcpy, the fastest primitive
/// the runtime exposes for equal-length slices.
#[inline]
pub fn copy_slice(src: &[u8], dst: &mut [u8]) {
    dst.copy_from_slice(src);
}

/// Naive single-byte loop; the pessimal baseline.
pub fn copy_bytewise(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());
    unsafe {
        let mut s = src.as_ptr();
        let mut d = dst.as_mut_ptr();
        let end = s.add(src.len());
        while s < end {
            *d = *s;
            s = s.add(1);
            d = d.add(1);
        }
    }
}

/// 8-byte word loop with a byte tail.
///
/// Copies in `u64` chunks while the remainder allows, then falls back to
/// single bytes for the final `len % 8` bytes, so lengths not divisible by
/// 8 still copy fully.
pub fn copy_wordwise(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());
    unsafe {
        let mut s = src.as_ptr();
        let mut d = dst.as_mut_ptr();
        let mut rest = src.len();

        while rest >= WORD {
            ptr::write_unaligned(d as *mut u64, ptr::read_unaligned(s as *const u64));
            s = s.add(WORD);
            d = d.add(WORD);
            rest -= WORD;
        }

        while rest >= 1 {
            *d = *s;
            s = s.add(1);
            d = d.add(1);
            rest -= 1;
        }
    }
}

/// Bounded block copy: explicit capacity and length bounds, one bulk call.
///
/// The destination's length is its capacity; a capacity smaller than the
/// source length is rejected. The suites always supply equal capacity and
/// length, so the check is a precondition guard against overrun, not a
/// branch callers rely on.
pub fn copy_bounded(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() <= dst.len(),
        "destination capacity {} < source length {}",
        dst.len(),
        src.len()
    );
    unsafe { ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr(), src.len()) };
}

/// Low-level block-copy intrinsic on raw addresses, bypassing every
/// bounds-checked wrapper.
#[inline]
pub fn copy_ptr_block(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());
    unsafe { ptr::copy_nonoverlapping(src.as_ptr(), dst.as_mut_ptr(), src.len()) };
}

/// Foreign call to the C runtime's `memmove`, documented overlap-safe.
pub fn copy_foreign_move(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());
    unsafe {
        memblit_sys::memmove(
            dst.as_mut_ptr() as *mut c_void,
            src.as_ptr() as *const c_void,
            src.len(),
        );
    }
}

/// Foreign call to the C runtime's `memcpy`.
///
/// The contract assumes the ranges do not overlap, which the suites
/// guarantee: source and destination are always distinct allocations.
pub fn copy_foreign_memcpy(src: &[u8], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());
    unsafe {
        memblit_sys::memcpy(
            dst.as_mut_ptr() as *mut c_void,
            src.as_ptr() as *const c_void,
            src.len(),
        );
    }
}

/// Strategy identifier, one variant per copy function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Slice,
    Bytewise,
    Wordwise,
    Bounded,
    PtrBlock,
    ForeignMove,
    ForeignMemcpy,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Slice,
        Strategy::Bytewise,
        Strategy::Wordwise,
        Strategy::Bounded,
        Strategy::PtrBlock,
        Strategy::ForeignMove,
        Strategy::ForeignMemcpy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Slice => "slice_copy",
            Strategy::Bytewise => "byte_loop",
            Strategy::Wordwise => "word_loop",
            Strategy::Bounded => "bounded_copy",
            Strategy::PtrBlock => "ptr_block_copy",
            Strategy::ForeignMove => "ffi_memmove",
            Strategy::ForeignMemcpy => "ffi_memcpy",
        }
    }

    /// Run this strategy over the given views.
    #[inline]
    pub fn run(self, src: &[u8], dst: &mut [u8]) {
        match self {
            Strategy::Slice => copy_slice(src, dst),
            Strategy::Bytewise => copy_bytewise(src, dst),
            Strategy::Wordwise => copy_wordwise(src, dst),
            Strategy::Bounded => copy_bounded(src, dst),
            Strategy::PtrBlock => copy_ptr_block(src, dst),
            Strategy::ForeignMove => copy_foreign_move(src, dst),
            Strategy::ForeignMemcpy => copy_foreign_memcpy(src, dst),
        }
    }
}
