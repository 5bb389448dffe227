// benches/quicksort.rs
//! Benchmark: last-element pivot vs. median-of-medians pivot.
//!
//! Random input favors variant 1 (no selection overhead); presorted input
//! is the adversarial case where variant 1 goes quadratic and variant 2
//! keeps its Θ(n log n) guarantee.

use algo_engine::gen::random_array;
use algo_engine::Quicksort;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SIZE: usize = 2_000;

fn bench_random_input(c: &mut Criterion) {
    let input = random_array(SIZE);

    c.bench_function("quick_sort1 random 2000", |bencher| {
        bencher.iter(|| {
            let mut qs = Quicksort::new();
            let mut data = input.clone();
            qs.quick_sort1(&mut data, 0, SIZE - 1);
            black_box(data);
        })
    });

    c.bench_function("quick_sort2 random 2000", |bencher| {
        bencher.iter(|| {
            let mut qs = Quicksort::new();
            let mut data = input.clone();
            qs.quick_sort2(&mut data, 0, SIZE - 1);
            black_box(data);
        })
    });
}

fn bench_presorted_input(c: &mut Criterion) {
    let input: Vec<i64> = (0..SIZE as i64).collect();

    c.bench_function("quick_sort1 presorted 2000", |bencher| {
        bencher.iter(|| {
            let mut qs = Quicksort::new();
            let mut data = input.clone();
            qs.quick_sort1(&mut data, 0, SIZE - 1);
            black_box(data);
        })
    });

    c.bench_function("quick_sort2 presorted 2000", |bencher| {
        bencher.iter(|| {
            let mut qs = Quicksort::new();
            let mut data = input.clone();
            qs.quick_sort2(&mut data, 0, SIZE - 1);
            black_box(data);
        })
    });
}

criterion_group!(quicksort_benches, bench_random_input, bench_presorted_input);
criterion_main!(quicksort_benches);
