//! Benchmarks for sequential accumulation and rendering.

use std::hint::black_box;

use {
    anyhow::anyhow,
    criterion::{BenchmarkId, Criterion, criterion_group, criterion_main},
    multierr::append,
};

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate");
    for count in [2usize, 16, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut error = None;
                for i in 0..count {
                    error = append(error, Some(anyhow!("error {i}")));
                }
                black_box(error)
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let error = (0..64).fold(None, |acc, i| {
        append(acc, Some(anyhow!("line {i}\ndetail {i}")))
    });
    c.bench_function("render_64", |b| {
        b.iter(|| black_box(error.as_ref().map(ToString::to_string)));
    });
}

criterion_group!(benches, bench_accumulate, bench_render);
criterion_main!(benches);
