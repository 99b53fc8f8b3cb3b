//! ML-DSA Benchmarks
//!
//! Keygen, sign, and verify across all parameter sets using the Criterion
//! framework.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rng;
use sigil_core::Signer;
use sigil_ml_dsa::{MlDsa44, MlDsa65, MlDsa87};

/// Test message for signing benchmarks.
const TEST_MESSAGE: &[u8] = b"The quick brown fox jumps over the lazy dog";

/// Benchmark key generation for all ML-DSA variants.
fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("ML-DSA KeyGen");
    group.throughput(Throughput::Elements(1));

    group.bench_function("ML-DSA-44", |b| {
        b.iter(|| {
            let mut rng = rng();
            black_box(MlDsa44::keygen(&mut rng).unwrap())
        })
    });

    group.bench_function("ML-DSA-65", |b| {
        b.iter(|| {
            let mut rng = rng();
            black_box(MlDsa65::keygen(&mut rng).unwrap())
        })
    });

    group.bench_function("ML-DSA-87", |b| {
        b.iter(|| {
            let mut rng = rng();
            black_box(MlDsa87::keygen(&mut rng).unwrap())
        })
    });

    group.finish();
}

/// Benchmark signing for all ML-DSA variants.
fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("ML-DSA Sign");
    group.throughput(Throughput::Elements(1));

    let (sk_44, _) = MlDsa44::keygen(&mut rng()).unwrap();
    let (sk_65, _) = MlDsa65::keygen(&mut rng()).unwrap();
    let (sk_87, _) = MlDsa87::keygen(&mut rng()).unwrap();

    group.bench_function("ML-DSA-44", |b| {
        b.iter(|| black_box(MlDsa44::sign(&sk_44, TEST_MESSAGE).unwrap()))
    });

    group.bench_function("ML-DSA-65", |b| {
        b.iter(|| black_box(MlDsa65::sign(&sk_65, TEST_MESSAGE).unwrap()))
    });

    group.bench_function("ML-DSA-87", |b| {
        b.iter(|| black_box(MlDsa87::sign(&sk_87, TEST_MESSAGE).unwrap()))
    });

    group.finish();
}

/// Benchmark verification for all ML-DSA variants.
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ML-DSA Verify");
    group.throughput(Throughput::Elements(1));

    let mut rng = rng();

    let (sk_44, vk_44) = MlDsa44::keygen(&mut rng).unwrap();
    let sig_44 = MlDsa44::sign(&sk_44, TEST_MESSAGE).unwrap();

    let (sk_65, vk_65) = MlDsa65::keygen(&mut rng).unwrap();
    let sig_65 = MlDsa65::sign(&sk_65, TEST_MESSAGE).unwrap();

    let (sk_87, vk_87) = MlDsa87::keygen(&mut rng).unwrap();
    let sig_87 = MlDsa87::sign(&sk_87, TEST_MESSAGE).unwrap();

    group.bench_function("ML-DSA-44", |b| {
        b.iter(|| black_box(MlDsa44::verify(&vk_44, TEST_MESSAGE, &sig_44).is_ok()))
    });

    group.bench_function("ML-DSA-65", |b| {
        b.iter(|| black_box(MlDsa65::verify(&vk_65, TEST_MESSAGE, &sig_65).is_ok()))
    });

    group.bench_function("ML-DSA-87", |b| {
        b.iter(|| black_box(MlDsa87::verify(&vk_87, TEST_MESSAGE, &sig_87).is_ok()))
    });

    group.finish();
}

criterion_group!(benches, bench_keygen, bench_sign, bench_verify);
criterion_main!(benches);
