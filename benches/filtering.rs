//! Benchmarks for catalog filtering and summary aggregation.
//!
//! The built-in catalog is tiny, so these run against generated catalogs to
//! keep the measurements meaningful.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fake::{Fake, Faker};
use teamboard::catalog::{Project, Summary};
use teamboard::state::StatusFilter;

fn generated_catalog(len: usize) -> Vec<Project> {
    (0..len).map(|_| Faker.fake()).collect()
}

fn bench_filtering(c: &mut Criterion) {
    let catalog = generated_catalog(1_000);
    c.bench_function("filter_active_1000", |b| {
        b.iter(|| {
            black_box(&catalog)
                .iter()
                .filter(|p| StatusFilter::Active.matches(p))
                .collect::<Vec<&Project>>()
        })
    });
}

fn bench_chip_counts(c: &mut Criterion) {
    let catalog = generated_catalog(1_000);
    c.bench_function("chip_counts_1000", |b| {
        b.iter(|| {
            StatusFilter::OPTIONS
                .iter()
                .map(|f| f.count(black_box(&catalog)))
                .collect::<Vec<usize>>()
        })
    });
}

fn bench_summary(c: &mut Criterion) {
    let catalog = generated_catalog(1_000);
    c.bench_function("summary_1000", |b| {
        b.iter(|| Summary::compute(black_box(&catalog)))
    });
}

criterion_group!(benches, bench_filtering, bench_chip_counts, bench_summary);
criterion_main!(benches);
