//! Verification oracle
//!
//! The checksum is a wrapping byte sum: deterministic, order-independent,
//! and identical whether computed over the source or a correct copy. It is a
//! correctness oracle, not a cryptographic integrity check. A mismatch is a
//! bug in the failing strategy or in the platform boundary and halts the
//! verification run.

use crate::strategies::Strategy;

/// Sum every byte into a `u64` accumulator with natural wraparound.
#[inline]
pub fn checksum(buf: &[u8]) -> u64 {
    buf.iter().fold(0u64, |acc, &b| acc.wrapping_add(b as u64))
}

/// Panics unless `buf` sums to `expected`, naming the failing operation.
pub fn verify(label: &str, buf: &[u8], expected: u64) {
    let got = checksum(buf);
    assert_eq!(
        got, expected,
        "{}: checksum mismatch ({} != {})",
        label, got, expected
    );
}

/// Overwrite every byte with zero, then assert the zero state.
pub fn zero_and_verify(label: &str, buf: &mut [u8]) {
    buf.fill(0);
    let got = checksum(buf);
    assert_eq!(got, 0, "{}: nonzero checksum {} after clearing", label, got);
}

/// Expected content of a correct copy, captured once at suite construction
/// and never recomputed.
///
/// With the `checksum` cargo feature a CRC32 of the source is recorded
/// alongside the byte sum and cross-checked on every verification, a
/// stronger fingerprint than the sum alone.
#[derive(Clone, Copy, Debug)]
pub struct Fingerprint {
    sum: u64,
    #[cfg(feature = "checksum")]
    crc: u32,
}

impl Fingerprint {
    pub fn of(buf: &[u8]) -> Self {
        Self {
            sum: checksum(buf),
            #[cfg(feature = "checksum")]
            crc: crc32fast::hash(buf),
        }
    }

    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Panics unless `buf` matches this fingerprint.
    pub fn assert_matches(&self, label: &str, buf: &[u8]) {
        verify(label, buf, self.sum);
        #[cfg(feature = "checksum")]
        assert_eq!(
            crc32fast::hash(buf),
            self.crc,
            "{}: crc32 fingerprint mismatch",
            label
        );
    }
}

/// The reset protocol, applied identically around every strategy: run the
/// copy, verify the destination against the expected fingerprint, zero the
/// destination, verify the zero state. Keeping the sequence in one helper
/// keeps verification order uniform across strategies.
pub fn check_strategy(strategy: Strategy, src: &[u8], dst: &mut [u8], expected: &Fingerprint) {
    strategy.run(src, dst);
    expected.assert_matches(strategy.name(), dst);
    zero_and_verify(strategy.name(), dst);
}
