use criterion::{criterion_group, criterion_main, BenchmarkGroup, Criterion, Throughput};
use mm_matrix::dense::DenseMatrix;
use mm_matrix::mul::mul;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn mul_benchmark(c: &mut Criterion) {
    const SMALL_SIZES: [usize; 4] = [8, 16, 32, 64];
    const LARGE_SIZES: [usize; 3] = [128, 256, 512];

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let inner = |g: &mut BenchmarkGroup<_>, rng: &mut ChaCha8Rng, sizes: &[usize]| {
        for &n in sizes {
            let a = DenseMatrix::<f64>::rand(rng, n, n);
            let b = DenseMatrix::<f64>::rand(rng, n, n);
            g.throughput(Throughput::Elements((n * n * n) as u64));
            g.bench_function(format!("{n}x{n}"), |bench| {
                bench.iter(|| mul(&a, &b).unwrap())
            });
        }
    };

    let mut g = c.benchmark_group("mul");
    inner(&mut g, &mut rng, &SMALL_SIZES);
    g.sample_size(10);
    inner(&mut g, &mut rng, &LARGE_SIZES);
}

criterion_group!(benches, mul_benchmark);
criterion_main!(benches);
