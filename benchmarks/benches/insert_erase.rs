// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use simple_vector::SimpleVector;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench insert_erase
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

// =============================================================================
// Vec vs SimpleVector: insert at front
// =============================================================================

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.insert(0, i as u64);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("SimpleVector", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = SimpleVector::new();
                for i in 0..s {
                    vec.insert(0, i as u64);
                }
                black_box(vec)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Vec vs SimpleVector: erase from front until empty
// =============================================================================

fn bench_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_front");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<Vec<u64>>(),
                |mut vec| {
                    while !vec.is_empty() {
                        black_box(vec.remove(0));
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("SimpleVector", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u64).collect::<SimpleVector<u64>>(),
                |mut vec| {
                    while !vec.is_empty() {
                        black_box(vec.erase(0).copied());
                    }
                    black_box(vec)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_front, bench_erase_front);
criterion_main!(benches);
