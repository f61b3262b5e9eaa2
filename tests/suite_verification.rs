//! Full-size suite verification at the fixed 10 MiB block

use memblit::{ForeignBlock, ForeignToForeign, OwnedToForeign, Strategy, BLOCK_SIZE};

// Wrapping byte sum of the deterministic fill over 10 MiB: 40960 complete
// 0..=255 runs of 32640 each.
const EXPECTED_SUM: u64 = 1_336_934_400;

#[test]
fn owned_suite_passes_every_strategy() {
    let mut suite = OwnedToForeign::new().expect("foreign allocation failed");
    assert_eq!(suite.expected_checksum(), EXPECTED_SUM);
    suite.verify_all();
}

#[test]
fn foreign_suite_passes_every_strategy() {
    let mut suite = ForeignToForeign::new().expect("foreign allocation failed");
    assert_eq!(suite.expected_checksum(), EXPECTED_SUM);
    suite.verify_all();
}

#[test]
fn destination_resets_between_strategies() {
    let mut suite = OwnedToForeign::new().expect("foreign allocation failed");

    suite.check(Strategy::Slice);
    // check() ends with the zero re-verify, so the next strategy starts
    // from a clean destination
    assert!(suite.destination().iter().all(|&b| b == 0));
    suite.check(Strategy::ForeignMemcpy);
}

#[test]
fn suite_reruns_are_stable() {
    let mut suite = ForeignToForeign::new().expect("foreign allocation failed");
    suite.verify_all();
    suite.verify_all();
}

#[test]
fn foreign_blocks_are_disjoint_allocations() {
    let a = ForeignBlock::alloc(BLOCK_SIZE).expect("foreign allocation failed");
    let b = ForeignBlock::alloc(BLOCK_SIZE).expect("foreign allocation failed");

    let (a_start, b_start) = (a.as_ptr() as usize, b.as_ptr() as usize);
    let a_end = a_start + a.len();
    let b_end = b_start + b.len();
    assert!(a_end <= b_start || b_end <= a_start, "blocks overlap");
}

#[test]
fn foreign_block_full_lifecycle() {
    let mut block = ForeignBlock::alloc(BLOCK_SIZE).expect("foreign allocation failed");
    assert_eq!(block.len(), BLOCK_SIZE);
    assert!(block.as_slice().iter().all(|&b| b == 0));

    block.as_mut_slice()[BLOCK_SIZE - 1] = 0xFF;
    assert_eq!(block.as_slice()[BLOCK_SIZE - 1], 0xFF);
    // Drop frees the block; double-free is impossible by construction
}
