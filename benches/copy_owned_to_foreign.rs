//! Owned → foreign copy strategies over the fixed 10 MiB block

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use memblit::{OwnedToForeign, Strategy, BLOCK_SIZE};

fn bench_owned_to_foreign(c: &mut Criterion) {
    let mut suite = OwnedToForeign::new().expect("foreign allocation failed");
    // Correctness gate before any timing number is trusted
    suite.verify_all();

    let mut group = c.benchmark_group("owned_to_foreign_10MiB");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));
    group.sample_size(10);

    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                suite.run(strategy);
                black_box(suite.destination());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_owned_to_foreign);
criterion_main!(benches);
