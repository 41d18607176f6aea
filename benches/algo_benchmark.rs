use criterion::{black_box, criterion_group, criterion_main, Criterion};

use algo_practice::{books, mingle, pnl, robber, stairs, subarray};

fn criterion_benchmark(c: &mut Criterion) {
    let n = black_box(10_000u64);

    c.bench_function(format!("stairs_count_ways {n}").as_str(), |b| {
        b.iter(|| stairs::count_ways(n))
    });

    c.bench_function(format!("stairs_count_ways_matrix {n}").as_str(), |b| {
        b.iter(|| stairs::count_ways_matrix(n))
    });

    c.bench_function(format!("stairs_count_ways_sequence {n}").as_str(), |b| {
        b.iter(|| stairs::count_ways_sequence(n as usize))
    });

    let word = "hacker".repeat(10_000);
    c.bench_function("mingle 60000chars", |b| {
        b.iter(|| mingle::mingle(black_box(&word), black_box(&word)))
    });

    let values: Vec<i64> = (0..100_000).map(|i| ((i * 37) % 101) - 50).collect();

    c.bench_function("robber_max_non_adjacent_sum 100000", |b| {
        b.iter(|| robber::max_non_adjacent_sum(black_box(&values)))
    });

    c.bench_function("subarray_max_subarray_sum 100000", |b| {
        b.iter(|| subarray::max_subarray_sum(black_box(&values)))
    });

    c.bench_function("pnl_max_negative_entries 100000", |b| {
        b.iter(|| pnl::max_negative_entries(black_box(&values)))
    });

    let shelf: Vec<i64> = (0..200).map(|i| (i % 23) + 1).collect();
    c.bench_function("books_min_purchase_cost 200books_4pairs", |b| {
        b.iter(|| books::min_purchase_cost(black_box(&shelf), black_box(11), black_box(4)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
