//! Benchmark for trampolined recursion.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funcseq::control::{Trampoline, count_to, factorial};
use std::hint::black_box;

fn benchmark_count_to(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("count_to");

    for bound in [1_000_u64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("trampoline", bound), &bound, |bencher, &bound| {
            bencher.iter(|| count_to(black_box(bound)));
        });
        // Baseline without per-step allocation.
        group.bench_with_input(BenchmarkId::new("loop", bound), &bound, |bencher, &bound| {
            bencher.iter(|| {
                let mut current = 0_u64;
                while current < black_box(bound) {
                    current += 1;
                }
                current
            });
        });
    }

    group.finish();
}

fn benchmark_factorial(criterion: &mut Criterion) {
    criterion.bench_function("factorial_20", |bencher| {
        bencher.iter(|| factorial(black_box(20)));
    });
}

fn benchmark_map_chain(criterion: &mut Criterion) {
    criterion.bench_function("trampoline_map_chain_100", |bencher| {
        bencher.iter(|| {
            let mut trampoline = Trampoline::done(black_box(0_u64));
            for _ in 0..100 {
                trampoline = trampoline.map(|value| value + 1);
            }
            trampoline.run()
        });
    });
}

criterion_group!(benches, benchmark_count_to, benchmark_factorial, benchmark_map_chain);
criterion_main!(benches);
