//! Benchmark for building `Person` records with the builder and mutator APIs.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funcseq::record::Person;
use std::hint::black_box;

fn benchmark_build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("person_build");

    for count in [1, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("builder", count), &count, |bencher, &count| {
            bencher.iter(|| {
                for index in 0..count {
                    black_box(Person::build(format!("person-{index}"), index));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("mutator", count), &count, |bencher, &count| {
            bencher.iter(|| {
                for index in 0..count {
                    black_box(Person::build_in_place(format!("person-{index}"), index));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build);
criterion_main!(benches);
