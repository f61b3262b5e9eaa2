//! Benchmark suites
//!
//! Each suite owns its buffers for the whole run: construction fills the
//! source with the deterministic pattern and records the expected
//! fingerprint once, every strategy writes into the same destination, and
//! dropping the suite releases the foreign blocks. The measurement driver
//! consumes the zero-argument strategy operations; `verify_all` is the
//! correctness-check mode that must pass before any timing number is
//! trusted.

use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::hint::black_box;

use crate::foreign::{Error, ForeignBlock};
use crate::oracle::{check_strategy, Fingerprint};
use crate::strategies::{self, Strategy};
use crate::BLOCK_SIZE;

/// `byte[i] = i mod 256`, the pattern both suites copy.
fn fill_pattern(buf: &mut [u8]) {
    for (i, b) in buf.iter_mut().enumerate() {
        *b = (i & 0xff) as u8;
    }
}

/// Rust-owned source copied into a foreign destination.
pub struct OwnedToForeign {
    src: Vec<u8>,
    dst: ForeignBlock,
    expected: Fingerprint,
}

impl OwnedToForeign {
    /// Allocate both buffers, fill the source, record the expected
    /// fingerprint. Allocation failure aborts the run.
    pub fn new() -> Result<Self, Error> {
        let mut src = vec![0u8; BLOCK_SIZE];
        fill_pattern(&mut src);
        let expected = Fingerprint::of(&src);
        let dst = ForeignBlock::alloc(BLOCK_SIZE)?;
        Ok(Self { src, dst, expected })
    }

    pub fn expected_checksum(&self) -> u64 {
        self.expected.sum()
    }

    /// Read-only view of the destination, for the driver's `black_box`.
    pub fn destination(&self) -> &[u8] {
        self.dst.as_slice()
    }

    pub fn copy_slice(&mut self) {
        strategies::copy_slice(&self.src, self.dst.as_mut_slice());
    }

    pub fn copy_bytewise(&mut self) {
        strategies::copy_bytewise(&self.src, self.dst.as_mut_slice());
    }

    pub fn copy_wordwise(&mut self) {
        strategies::copy_wordwise(&self.src, self.dst.as_mut_slice());
    }

    pub fn copy_bounded(&mut self) {
        strategies::copy_bounded(&self.src, self.dst.as_mut_slice());
    }

    pub fn copy_ptr_block(&mut self) {
        strategies::copy_ptr_block(&self.src, self.dst.as_mut_slice());
    }

    pub fn copy_foreign_move(&mut self) {
        strategies::copy_foreign_move(&self.src, self.dst.as_mut_slice());
    }

    pub fn copy_foreign_memcpy(&mut self) {
        strategies::copy_foreign_memcpy(&self.src, self.dst.as_mut_slice());
    }

    /// Driver dispatch to the zero-argument operation for `strategy`.
    #[inline]
    pub fn run(&mut self, strategy: Strategy) {
        match strategy {
            Strategy::Slice => self.copy_slice(),
            Strategy::Bytewise => self.copy_bytewise(),
            Strategy::Wordwise => self.copy_wordwise(),
            Strategy::Bounded => self.copy_bounded(),
            Strategy::PtrBlock => self.copy_ptr_block(),
            Strategy::ForeignMove => self.copy_foreign_move(),
            Strategy::ForeignMemcpy => self.copy_foreign_memcpy(),
        }
    }

    /// One strategy through the reset protocol.
    pub fn check(&mut self, strategy: Strategy) {
        check_strategy(strategy, &self.src, self.dst.as_mut_slice(), &self.expected);
    }

    /// Correctness-check mode: every strategy in turn, each isolated by the
    /// zero-and-reverify reset.
    pub fn verify_all(&mut self) {
        for strategy in Strategy::ALL {
            self.check(strategy);
        }
    }
}

/// Foreign source copied into a foreign destination.
pub struct ForeignToForeign {
    src: ForeignBlock,
    dst: ForeignBlock,
    expected: Fingerprint,
}

impl ForeignToForeign {
    pub fn new() -> Result<Self, Error> {
        let mut src = ForeignBlock::alloc(BLOCK_SIZE)?;
        fill_pattern(src.as_mut_slice());
        let expected = Fingerprint::of(src.as_slice());
        let dst = ForeignBlock::alloc(BLOCK_SIZE)?;
        Ok(Self { src, dst, expected })
    }

    pub fn expected_checksum(&self) -> u64 {
        self.expected.sum()
    }

    pub fn destination(&self) -> &[u8] {
        self.dst.as_slice()
    }

    pub fn copy_slice(&mut self) {
        strategies::copy_slice(self.src.as_slice(), self.dst.as_mut_slice());
    }

    pub fn copy_bytewise(&mut self) {
        strategies::copy_bytewise(self.src.as_slice(), self.dst.as_mut_slice());
    }

    pub fn copy_wordwise(&mut self) {
        strategies::copy_wordwise(self.src.as_slice(), self.dst.as_mut_slice());
    }

    pub fn copy_bounded(&mut self) {
        strategies::copy_bounded(self.src.as_slice(), self.dst.as_mut_slice());
    }

    pub fn copy_ptr_block(&mut self) {
        strategies::copy_ptr_block(self.src.as_slice(), self.dst.as_mut_slice());
    }

    pub fn copy_foreign_move(&mut self) {
        strategies::copy_foreign_move(self.src.as_slice(), self.dst.as_mut_slice());
    }

    pub fn copy_foreign_memcpy(&mut self) {
        strategies::copy_foreign_memcpy(self.src.as_slice(), self.dst.as_mut_slice());
    }

    #[inline]
    pub fn run(&mut self, strategy: Strategy) {
        match strategy {
            Strategy::Slice => self.copy_slice(),
            Strategy::Bytewise => self.copy_bytewise(),
            Strategy::Wordwise => self.copy_wordwise(),
            Strategy::Bounded => self.copy_bounded(),
            Strategy::PtrBlock => self.copy_ptr_block(),
            Strategy::ForeignMove => self.copy_foreign_move(),
            Strategy::ForeignMemcpy => self.copy_foreign_memcpy(),
        }
    }

    pub fn check(&mut self, strategy: Strategy) {
        check_strategy(
            strategy,
            self.src.as_slice(),
            self.dst.as_mut_slice(),
            &self.expected,
        );
    }

    pub fn verify_all(&mut self) {
        for strategy in Strategy::ALL {
            self.check(strategy);
        }
    }
}

/// Foreign allocate/release round trip at the fixed block size.
///
/// Panics if the allocator returns null; the run is not worth continuing
/// with a failing allocator.
pub fn alloc_foreign() {
    unsafe {
        let ptr = memblit_sys::malloc(BLOCK_SIZE);
        assert!(
            !ptr.is_null(),
            "foreign allocator returned null for {} bytes",
            BLOCK_SIZE
        );
        black_box(ptr);
        memblit_sys::free(ptr);
    }
}

/// Global-allocator round trip at the fixed block size, for comparison with
/// the foreign allocator.
pub fn alloc_global() {
    let layout = Layout::from_size_align(BLOCK_SIZE, 16).expect("constant layout is valid");
    unsafe {
        let ptr = alloc(layout);
        if ptr.is_null() {
            handle_alloc_error(layout);
        }
        black_box(ptr);
        dealloc(ptr, layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_pattern_wraps_at_256() {
        let mut buf = vec![0u8; 300];
        fill_pattern(&mut buf);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[255], 255);
        assert_eq!(buf[256], 0);
        assert_eq!(buf[299], 43);
    }

    #[test]
    fn alloc_round_trips_do_not_panic() {
        alloc_foreign();
        alloc_global();
    }
}
