//! # memblit
//!
//! Measures and validates strategies for copying a fixed-size memory block
//! (1) from a Rust-owned buffer into a foreign-allocated buffer and
//! (2) between two foreign-allocated buffers, so the fastest portable
//! primitive for a given interop boundary can be picked from real numbers
//! instead of folklore.
//!
//! Every strategy is validated before its timings are trusted: copy, compare
//! the destination's checksum against the fingerprint recorded at
//! construction, zero the destination, re-check the zero state. Timing
//! itself is driven externally by the criterion benches under `benches/`.
//!
//! ```rust
//! use memblit::{oracle, strategies};
//!
//! let src: Vec<u8> = (0u8..16).collect();
//! let mut dst = vec![0u8; 16];
//! strategies::copy_bytewise(&src, &mut dst);
//! assert_eq!(oracle::checksum(&dst), 120);
//! ```

pub mod foreign;
pub mod oracle;
pub mod strategies;
pub mod suite;

pub use foreign::{Error, ForeignBlock};
pub use strategies::Strategy;
pub use suite::{ForeignToForeign, OwnedToForeign};

/// Fixed block size shared by both copy suites and the allocation round
/// trips: 10 MiB. A configuration constant, not a parameter.
pub const BLOCK_SIZE: usize = 10 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_strategy_round_trips_the_doc_pattern() {
        let src: Vec<u8> = (0u8..16).collect();
        for strategy in Strategy::ALL {
            let mut dst = vec![0u8; 16];
            strategy.run(&src, &mut dst);
            assert_eq!(dst, src, "{}", strategy.name());
            assert_eq!(oracle::checksum(&dst), 120, "{}", strategy.name());
        }
    }

    #[test]
    fn block_size_is_ten_mebibytes() {
        assert_eq!(BLOCK_SIZE, 10 * 1024 * 1024);
    }
}
