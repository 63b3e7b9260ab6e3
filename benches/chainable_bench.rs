//! Benchmark for the synchronous `Chainable` container.
//!
//! Measures chain depth, short-circuit cost and terminal matching.

use chainable::control::{Arms, Cases, Chainable, Check};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn increment(value: u64) -> Chainable<u64, u64> {
    Chainable::ok(value.wrapping_add(1))
}

// =============================================================================
// Chain Benchmarks
// =============================================================================

fn benchmark_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chainable_chain");

    for depth in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("ok_path", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let result = (0..depth).fold(Chainable::ok(black_box(0)), |current, _| {
                    current.chain(increment)
                });
                black_box(result)
            });
        });

        // Every step after the first is a pass-through
        group.bench_with_input(
            BenchmarkId::new("short_circuited", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| {
                    let result = (0..depth).fold(
                        Chainable::<u64, u64>::error(black_box(0)),
                        |current, _| current.chain(increment),
                    );
                    black_box(result)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("with_check", depth),
            &depth,
            |bencher, &depth| {
                bencher.iter(|| {
                    let result = (0..depth).fold(Chainable::ok(black_box(0)), |current, _| {
                        current
                            .check(|value| Check::ensure(*value < u64::MAX, Chainable::nothing))
                            .chain(increment)
                    });
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Matching Benchmarks
// =============================================================================

fn benchmark_matching(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chainable_match");

    group.bench_function("match_with_cases", |bencher| {
        bencher.iter(|| {
            let chainable: Chainable<u64, u64> = Chainable::ok(black_box(4));
            let result = chainable.match_with(Cases {
                left: |value| value,
                right: |value| value,
                ok: |value| value * 2,
                error: |error| error,
                nothing: || 0,
            });
            black_box(result)
        });
    });

    group.bench_function("match_arms", |bencher| {
        bencher.iter(|| {
            let chainable: Chainable<u64, u64> = Chainable::ok(black_box(4));
            let result = chainable.match_arms(
                Arms::new()
                    .ok(|value| value * 2)
                    .error(|error| error),
            );
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_chain, benchmark_matching);

criterion_main!(benches);
