//! sortkit benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Slice sorting across every algorithm (random, sorted, reversed, duplicated)
//! - List sorting by relinking (1K to 100K nodes)
//! - Order statistics (median queries per strategy)
//! - Rotation (every strategy, co-prime and shared-factor amounts)
//!
//! Quadratic algorithms are only measured at the smaller sizes.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use sortkit::prelude::*;
use sortkit::{Algorithm, RotationMethod, Strategy};
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

const QUADRATIC: [Algorithm; 3] = [Bubble, Selection, Insertion];
const LINEARITHMIC: [Algorithm; 4] = [TopDownMerge, BottomUpMerge, Quick, Heap];

fn is_quadratic(algorithm: Algorithm) -> bool {
    QUADRATIC.contains(&algorithm)
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform random integers over a wide range.
fn generate_random(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

/// Integers drawn from only 16 distinct values.
fn generate_duplicated(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..16)).collect()
}

/// Random lowercase words of 4 to 12 characters.
fn generate_words(size: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let len = rng.random_range(4..=12);
            (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_slice_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_random");
    group.sample_size(30);

    for size in [1_000, 10_000, 100_000] {
        let data = generate_random(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        for algorithm in QUADRATIC.into_iter().chain(LINEARITHMIC) {
            if is_quadratic(algorithm) && size > 10_000 {
                continue;
            }
            let sorter = Sort::new().algorithm(algorithm).build().unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}"), size),
                &data,
                |b, data| {
                    b.iter_batched(
                        || data.clone(),
                        |mut v| {
                            sorter.sort(&mut v);
                            black_box(v)
                        },
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

fn bench_slice_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_layouts");
    group.sample_size(30);

    let size = 50_000;
    let ascending: Vec<i64> = (0..size as i64).collect();
    let layouts = [
        ("sorted", ascending.clone()),
        ("reversed", ascending.iter().rev().copied().collect()),
        ("duplicated", generate_duplicated(size, 7)),
    ];

    for (layout, data) in &layouts {
        for algorithm in LINEARITHMIC {
            let sorter = Sort::new().algorithm(algorithm).build().unwrap();
            group.bench_with_input(BenchmarkId::new(format!("{algorithm:?}"), layout), data, |b, data| {
                b.iter_batched(
                    || data.clone(),
                    |mut v| {
                        sorter.sort(&mut v);
                        black_box(v)
                    },
                    criterion::BatchSize::LargeInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_slice_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_strings");
    group.sample_size(30);

    let words = generate_words(20_000, 11);
    for algorithm in LINEARITHMIC {
        let sorter = Sort::new().algorithm(algorithm).build().unwrap();
        group.bench_function(format!("{algorithm:?}"), |b| {
            b.iter_batched(
                || words.clone(),
                |mut v| {
                    sorter.sort(&mut v);
                    black_box(v)
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("lists");
    group.sample_size(20);

    for size in [1_000, 10_000, 100_000] {
        let data = generate_random(size, 99);
        group.throughput(Throughput::Elements(size as u64));

        for algorithm in QUADRATIC.into_iter().chain(LINEARITHMIC) {
            if is_quadratic(algorithm) && size > 1_000 {
                continue;
            }
            let sorter = Sort::new().algorithm(algorithm).build().unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}"), size),
                &data,
                |b, data| {
                    b.iter_batched(
                        || ListNode::from_slice(data),
                        |head| black_box(sorter.sort_list(head).unwrap()),
                        criterion::BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

fn bench_order_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");
    group.sample_size(50);

    for size in [1_001, 10_001, 100_001] {
        let data = generate_random(size, 5);
        group.throughput(Throughput::Elements(size as u64));

        for strategy in [Strategy::BruteForce, Strategy::PriorityQueue, Strategy::QuickSelect] {
            let finder = Median::new().strategy(strategy).build().unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), size),
                &data,
                |b, data| b.iter(|| finder.find_median(black_box(data)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");
    group.sample_size(50);

    let size = 100_000;
    let data: Vec<u32> = (0..size as u32).collect();
    group.throughput(Throughput::Elements(size as u64));

    // 37 is co-prime with the length; 25_000 shares a large factor.
    for k in [37, 25_000] {
        for method in [
            RotationMethod::Reversal,
            RotationMethod::Juggling,
            RotationMethod::BlockSwap,
        ] {
            let rotator = Rotate::new().method(method).build().unwrap();
            group.bench_with_input(BenchmarkId::new(format!("{method:?}"), k), &k, |b, &k| {
                b.iter_batched(
                    || data.clone(),
                    |mut v| {
                        rotator.rotate_by(&mut v, k).unwrap();
                        black_box(v)
                    },
                    criterion::BatchSize::LargeInput,
                )
            });
        }
    }

    // Shift is O(n * k); measured on a single small amount only.
    let shift = Rotate::new().method(RotationMethod::Shift).build().unwrap();
    group.bench_function("Shift/3", |b| {
        b.iter_batched(
            || data.clone(),
            |mut v| {
                shift.rotate_by(&mut v, 3).unwrap();
                black_box(v)
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_slice_random,
    bench_slice_layouts,
    bench_slice_strings,
    bench_lists,
    bench_order_statistics,
    bench_rotation,
);

criterion_main!(benches);
