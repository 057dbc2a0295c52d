//! Benchmarks for field matrix arithmetic
//!
//! Measures the generator-times-challenge product at the sizes the
//! parameter sets use, plus uniform sampling of a full generator matrix.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lesscrypt_algorithms::FieldMatrix;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// (k, n, q) shapes to benchmark
const SHAPES: &[(usize, usize, u32)] = &[(4, 6, 7), (32, 64, 127), (126, 252, 127)];

fn bench_matrix_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_matrix_mul_vec");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for &(k, n, q) in SHAPES {
        let generator = FieldMatrix::random(k, n, q, &mut rng).unwrap();
        let challenge = FieldMatrix::random(n, 1, q, &mut rng).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", k, n)),
            &(generator, challenge),
            |b, (g, x)| b.iter(|| black_box(g.mul(x).unwrap())),
        );
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_matrix_random");
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for &(k, n, q) in SHAPES {
        group.bench_function(BenchmarkId::from_parameter(format!("{}x{}", k, n)), |b| {
            b.iter(|| black_box(FieldMatrix::random(k, n, q, &mut rng).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matrix_vector, bench_random);
criterion_main!(benches);
