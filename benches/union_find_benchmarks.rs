/// Performance benchmarks for union-find and zero-sum verification
///
/// Run with: cargo bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use moneymatters::{verify, UnionFind, Value};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generate random amounts and union requests
fn generate_workload(n: usize, m: usize) -> (Vec<Value>, Vec<(usize, usize)>) {
    let mut rng = StdRng::seed_from_u64(42);
    let values = (0..n).map(|_| rng.gen_range(-10_000..=10_000)).collect();
    let unions = (0..m)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();
    (values, unions)
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");

    for size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let (_, unions) = generate_workload(*size, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut uf = UnionFind::new(size);
                for &(x, y) in &unions {
                    uf.union(x, y).unwrap();
                }
                black_box(uf.group_count())
            });
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");

    for size in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let (values, unions) = generate_workload(*size, *size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_with_setup(
                || {
                    let mut uf = UnionFind::new(size);
                    for &(x, y) in &unions {
                        uf.union(x, y).unwrap();
                    }
                    uf
                },
                |mut uf| black_box(verify(&mut uf, &values).unwrap()),
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_union, bench_verify);
criterion_main!(benches);
