use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dpake_algorithms::{HashFunction, HashRegistry};

const SIZES: [usize; 3] = [64, 1024, 16384];

fn bench_hashes(c: &mut Criterion) {
    let registry = HashRegistry::default();
    let mut group = c.benchmark_group("Hash");

    for name in ["SHA-256", "SHA-512", "SHA-3(256)", "SHAKE-256(528)", "Truncated(SHA-512,521)"] {
        let mut hash = registry.create(name).unwrap();
        for size in SIZES {
            let data = vec![0xA5u8; size];
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| {
                    hash.update(black_box(data));
                    hash.finalize().unwrap()
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_hashes);
criterion_main!(benches);
