use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dpake_algorithms::{EcGroup, Edwards25519, NistP256, NistP384, NistP521};
use dpake_api::PeerId;
use dpake_spake2::Context;
use dpake_tests::{parameters, PASSWORD};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_group<G: EcGroup>(c: &mut Criterion) {
    let mut group = c.benchmark_group("SPAKE2");
    let id = G::ID.name();

    group.bench_function(BenchmarkId::new("parameters", id), |b| {
        b.iter(|| parameters::<G>(black_box(PASSWORD)).unwrap())
    });

    let params = parameters::<G>(PASSWORD).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    group.bench_function(BenchmarkId::new("generate_message", id), |b| {
        b.iter(|| {
            let mut ctx = Context::new(PeerId::PeerA, &params);
            ctx.generate_message(&mut rng).unwrap()
        })
    });

    let msg_b = Context::new(PeerId::PeerB, &params)
        .generate_message(&mut rng)
        .unwrap();

    group.bench_function(BenchmarkId::new("handshake", id), |b| {
        b.iter(|| {
            let mut ctx = Context::new(PeerId::PeerA, &params);
            ctx.generate_message(&mut rng).unwrap();
            ctx.process_message(black_box(&msg_b)).unwrap()
        })
    });

    group.finish();
}

fn bench_spake2(c: &mut Criterion) {
    bench_group::<NistP256>(c);
    bench_group::<NistP384>(c);
    bench_group::<NistP521>(c);
    bench_group::<Edwards25519>(c);
}

criterion_group!(benches, bench_spake2);
criterion_main!(benches);
