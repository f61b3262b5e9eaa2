use std::time::Instant;

use memblit::{ForeignToForeign, OwnedToForeign, Strategy, BLOCK_SIZE};

fn main() {
    println!("═══════════════════════════════════════════════════════════");
    println!(
        "  memblit correctness check ({} MiB block)",
        BLOCK_SIZE / (1024 * 1024)
    );
    println!("═══════════════════════════════════════════════════════════\n");

    let mut owned = OwnedToForeign::new().expect("foreign allocation failed");
    println!(
        "owned → foreign (expected checksum {})",
        owned.expected_checksum()
    );
    for strategy in Strategy::ALL {
        // Rough single-shot time for orientation; real numbers come from
        // the criterion benches.
        let start = Instant::now();
        owned.run(strategy);
        let elapsed = start.elapsed();

        owned.check(strategy);
        println!("  ✓ {:<16} {:>10.2?}", strategy.name(), elapsed);
    }
    println!();

    let mut foreign = ForeignToForeign::new().expect("foreign allocation failed");
    println!(
        "foreign → foreign (expected checksum {})",
        foreign.expected_checksum()
    );
    for strategy in Strategy::ALL {
        let start = Instant::now();
        foreign.run(strategy);
        let elapsed = start.elapsed();

        foreign.check(strategy);
        println!("  ✓ {:<16} {:>10.2?}", strategy.name(), elapsed);
    }
    println!();

    println!("All strategies verified.");
}
