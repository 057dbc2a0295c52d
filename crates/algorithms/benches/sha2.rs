use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lesscrypt_algorithms::hash::{HashFunction, Sha256};

// Digest input sizes: salt plus response digits plus message
const SIZES: &[usize] = &[
    64,    // 1 block
    256,   // 4 blocks
    1024,  // 1 KB
    16384, // 16 KB
];

fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHA-256");

    for &size in SIZES {
        let data = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let digest = Sha256::digest(black_box(data)).unwrap();
                black_box(digest);
            });
        });
    }

    group.finish();
}

fn bench_sha256_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHA-256-hex");

    for &size in SIZES {
        let data = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            let mut hasher = Sha256::new();
            b.iter(|| {
                hasher.update(black_box(b"randomsalt")).unwrap();
                hasher.update(black_box(data)).unwrap();
                black_box(hasher.finalize_hex().unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha256, bench_sha256_hex);
criterion_main!(benches);
