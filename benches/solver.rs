//! Benchmarks for the word chain solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lottawords::index::WordIndex;
use lottawords::validate::is_playable;
use lottawords::{solve, SearchConfig, Square};

/// Builds a deterministic dictionary of `count` pseudo-words over the square's letters.
///
/// Roughly half the words are playable; the rest put two letters from one
/// side next to each other.
fn synthetic_dictionary(square: &Square, count: usize) -> Vec<String> {
    let letters: Vec<char> = square.letters().iter().collect();
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|_| {
            let len = 3 + (next() % 7) as usize;
            (0..len)
                .map(|_| letters[(next() % letters.len() as u64) as usize])
                .collect()
        })
        .collect()
}

/// Benchmark a full solve against a large synthetic dictionary.
fn bench_solve(c: &mut Criterion) {
    let square: Square = "ACD-GHI-KMN-ORY".parse().unwrap();
    let dictionary = synthetic_dictionary(&square, 20_000);
    let config = SearchConfig::default();

    c.bench_function("solve_synthetic_20k", |b| {
        b.iter(|| solve(black_box(&square), black_box(&dictionary), &config))
    });
}

/// Benchmark a solve with the quick preset.
fn bench_solve_quick(c: &mut Criterion) {
    let square: Square = "ACD-GHI-KMN-ORY".parse().unwrap();
    let dictionary = synthetic_dictionary(&square, 20_000);
    let config = SearchConfig::quick();

    let mut group = c.benchmark_group("quick");
    group.sample_size(20);
    group.bench_function("solve_synthetic_20k", |b| {
        b.iter(|| solve(black_box(&square), black_box(&dictionary), &config))
    });
    group.finish();
}

/// Benchmark building the playable-word index.
fn bench_index(c: &mut Criterion) {
    let square: Square = "ACD-GHI-KMN-ORY".parse().unwrap();
    let dictionary = synthetic_dictionary(&square, 20_000);

    c.bench_function("build_index", |b| {
        b.iter(|| WordIndex::build(black_box(&dictionary), &square))
    });
}

/// Benchmark validating a single word.
fn bench_is_playable(c: &mut Criterion) {
    let square: Square = "ACD-GHI-KMN-ORY".parse().unwrap();

    c.bench_function("is_playable", |b| {
        b.iter(|| is_playable(black_box("MONARCHY"), &square))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_solve_quick,
    bench_index,
    bench_is_playable
);
criterion_main!(benches);
