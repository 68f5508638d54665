//! UniqueCollection benchmarks.
//!
//! Measures bulk construction (`of`) against incremental `add`, plus the
//! cost of the derived-collection operations `filter` and `map`.
//!
//! Inputs contain every value twice so that deduplication is exercised.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use unique_collection::collection::UniqueCollection;

const SIZES: [i32; 4] = [100, 1000, 10000, 100_000];

/// Pre-generates an input with each value appearing twice.
fn generate_input(size: i32) -> Vec<i32> {
    (0..size).chain(0..size).collect()
}

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_of(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_collection_of");

    for size in SIZES {
        let base_vec = generate_input(size);
        group.bench_with_input(BenchmarkId::new("of", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| black_box(UniqueCollection::of(black_box(elements))),
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_collection_add");

    for size in SIZES {
        let base_vec = generate_input(size);
        group.bench_with_input(BenchmarkId::new("add", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| {
                    let mut collection = UniqueCollection::new();
                    for element in elements {
                        collection.add(black_box(element));
                    }
                    black_box(collection)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

fn benchmark_filter_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_collection_derive");

    for size in SIZES {
        let collection = UniqueCollection::of(generate_input(size));
        group.bench_with_input(BenchmarkId::new("filter", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(collection.filter(|value, _| value % 2 == 0)));
        });
        group.bench_with_input(BenchmarkId::new("map", size), &collection, |bencher, collection| {
            bencher.iter(|| black_box(collection.map(|value, _| value / 2)));
        });
    }

    group.finish();
}

fn benchmark_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique_collection_delete");

    for size in SIZES {
        let collection = UniqueCollection::of(generate_input(size));
        let target = size / 2;
        group.bench_with_input(BenchmarkId::new("delete_middle", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || collection.clone(),
                |mut collection| black_box(collection.delete(black_box(&target))),
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_of,
    benchmark_add,
    benchmark_filter_map,
    benchmark_delete
);
criterion_main!(benches);
