use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use loop_coalesce::matrix::fill::initialize_matrices;
use loop_coalesce::matrix::naive_ijk::matmul_naive_ijk;
use loop_coalesce::{CoalesceFactor, Fill, NUM_ELEMENTS};

fn bench_factors(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul_4x4");
    let (a, b) = initialize_matrices(Fill::Random { seed: 0xC0FF_EE42 });
    let mut out = vec![0.0f32; NUM_ELEMENTS];

    for factor in CoalesceFactor::ALL {
        let kernel = factor.kernel();
        group.bench_function(BenchmarkId::new("coalesce", factor.levels()), |bench| {
            bench.iter(|| {
                kernel(black_box(&a), black_box(&b), black_box(&mut out));
                black_box(out[5]);
            });
        });
    }

    group.bench_function("reference_ijk", |bench| {
        bench.iter(|| {
            matmul_naive_ijk(black_box(&a), black_box(&b), black_box(&mut out), 4, 4, 4);
            black_box(out[5]);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_factors);
criterion_main!(benches);
