//! Benchmark for `AsyncChainable`.
//!
//! Uses `criterion::to_async()` so block_on calls are batched per sample.
//! Compares an already-settled seed against a pending one, and measures the
//! per-step cost of `task` and of a lifted `chain`.

use chainable::control::{Arms, Chainable};
use chainable::effect::{AsyncChainable, task};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

async fn promise_increment(value: u64) -> Chainable<u64, u64> {
    Chainable::ok(value.wrapping_add(1))
}

fn increment(value: u64) -> Chainable<u64, u64> {
    Chainable::ok(value.wrapping_add(1))
}

// =============================================================================
// Seed Benchmarks
// =============================================================================

fn benchmark_seed(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("async_chainable_seed");

    group.bench_function("of_settle", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let lifted = AsyncChainable::<u64, u64>::ok(black_box(42));
            black_box(lifted.settle().await)
        });
    });

    group.bench_function("task_settle", |bencher| {
        bencher.to_async(&runtime).iter(|| async {
            let lifted = task(promise_increment(black_box(42)));
            black_box(lifted.settle().await)
        });
    });

    group.finish();
}

// =============================================================================
// Step Benchmarks
// =============================================================================

fn benchmark_steps(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("async_chainable_steps");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("task", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let lifted = (0..depth).fold(AsyncChainable::<u64, u64>::ok(0), |current, _| {
                    current.task(promise_increment)
                });
                black_box(lifted.settle().await)
            });
        });

        group.bench_with_input(BenchmarkId::new("chain", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let lifted = (0..depth).fold(AsyncChainable::<u64, u64>::ok(0), |current, _| {
                    current.chain(increment)
                });
                black_box(lifted.settle().await)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("will_match_arms", depth),
            &depth,
            |bencher, &depth| {
                bencher.to_async(&runtime).iter(|| async move {
                    let result = (0..depth)
                        .fold(AsyncChainable::<u64, u64>::ok(0), |current, _| {
                            current.task(promise_increment)
                        })
                        .will_match_arms(Arms::new().ok(|value| value).error(|error| error))
                        .await;
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_seed, benchmark_steps);

criterion_main!(benches);
