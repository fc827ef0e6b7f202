//! Benchmark for HashTrieMap vs standard HashMap.
//!
//! Compares skewtrie's HashTrieMap against Rust's standard HashMap for
//! insertion, lookup, and removal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use skewtrie::HashTrieMap;
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        // HashTrieMap insert
        group.bench_with_input(
            BenchmarkId::new("HashTrieMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = HashTrieMap::new();
                    for key in 0..size {
                        map = map.insert(black_box(key), black_box(key));
                    }
                    black_box(map)
                });
            },
        );

        // Standard HashMap insert
        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = HashMap::new();
                for key in 0..size {
                    map.insert(black_box(key), black_box(key));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        // Prepare data
        let trie_map: HashTrieMap<i32, i32> = (0..size).map(|key| (key, key)).collect();
        let standard_map: HashMap<i32, i32> = (0..size).map(|key| (key, key)).collect();

        // HashTrieMap get
        group.bench_with_input(
            BenchmarkId::new("HashTrieMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for key in (0..size).step_by(7) {
                        black_box(trie_map.get(&black_box(key)));
                    }
                });
            },
        );

        // Standard HashMap get
        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in (0..size).step_by(7) {
                    black_box(standard_map.get(&black_box(key)));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000] {
        let trie_map: HashTrieMap<i32, i32> = (0..size).map(|key| (key, key)).collect();

        group.bench_with_input(
            BenchmarkId::new("HashTrieMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = trie_map.clone();
                    for key in 0..size {
                        map = map.remove(&black_box(key)).unwrap();
                    }
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_get, benchmark_remove);
criterion_main!(benches);
