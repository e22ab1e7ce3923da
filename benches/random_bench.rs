//! Benchmark for state actions and the seeded generator.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazystate::random::{SimpleRng, both, double, int, ints, non_negative_less_than};
use lazystate::state::{State, sequence};
use std::hint::black_box;

// =============================================================================
// State Benchmarks
// =============================================================================

fn benchmark_state_sequence(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("state_sequence");

    for size in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("counter", size), &size, |bencher, &size| {
            let tick: State<u64, u64> = State::new(|s: u64| (s, s + 1));
            let action = sequence(std::iter::repeat_n(tick, size));
            bencher.iter(|| black_box(action.run(0)));
        });
    }

    group.finish();
}

fn benchmark_state_flat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("state_flat_map_chain");

    for depth in [10, 100] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |bencher, &depth| {
            let mut action: State<i64, i64> = State::pure(0);
            for _ in 0..depth {
                action = action.flat_map(|value| State::new(move |s: i64| (value + s, s + 1)));
            }
            bencher.iter(|| black_box(action.run(1)));
        });
    }

    group.finish();
}

// =============================================================================
// Random Benchmarks
// =============================================================================

fn benchmark_random_draws(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("random_draws");
    let rng = SimpleRng::new(42);

    group.bench_function("int", |bencher| {
        let action = int();
        bencher.iter(|| black_box(action.run(rng)));
    });

    group.bench_function("both_int_double", |bencher| {
        let action = both(int(), double());
        bencher.iter(|| black_box(action.run(rng)));
    });

    group.bench_function("non_negative_less_than", |bencher| {
        if let Ok(action) = non_negative_less_than(1_000) {
            bencher.iter(|| black_box(action.run(rng)));
        }
    });

    for count in [10, 1_000] {
        group.bench_with_input(BenchmarkId::new("ints", count), &count, |bencher, &count| {
            let action = ints(count);
            bencher.iter(|| black_box(action.run(rng)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_state_sequence,
    benchmark_state_flat_map_chain,
    benchmark_random_draws
);
criterion_main!(benches);
