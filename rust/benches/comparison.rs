use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rbarena::RbTree;
use std::collections::BTreeMap;

fn shuffled_keys(n: usize) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..n as u64).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(0xDEC0DE));
    keys
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion");

    for size in [100, 1_000, 10_000] {
        let keys = shuffled_keys(size);

        group.bench_with_input(BenchmarkId::new("RbTree", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RbTree::new();
                for &key in keys {
                    tree.add(key, key);
                }
                black_box(tree)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(key, key);
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1_000, 10_000, 100_000] {
        let keys = shuffled_keys(size);
        let tree: RbTree<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let lookups = &keys[..keys.len().min(1_000)];

        group.bench_with_input(BenchmarkId::new("RbTree", size), &lookups, |b, lookups| {
            b.iter(|| {
                for key in lookups.iter() {
                    black_box(tree.get(key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &lookups, |b, lookups| {
            b.iter(|| {
                for key in lookups.iter() {
                    black_box(map.get(key));
                }
            });
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in [1_000, 100_000] {
        let keys = shuffled_keys(size);
        let tree: RbTree<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
        let map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();

        group.bench_function(BenchmarkId::new("RbTree::iter", size), |b| {
            b.iter(|| black_box(tree.iter().map(|(_, v)| *v).sum::<u64>()));
        });

        group.bench_function(BenchmarkId::new("RbTree::traverse", size), |b| {
            b.iter(|| {
                let mut sum = 0u64;
                tree.traverse(|_, v| sum += *v);
                black_box(sum)
            });
        });

        group.bench_function(BenchmarkId::new("RbTree::unordered_iter", size), |b| {
            b.iter(|| black_box(tree.unordered_iter().map(|(_, v)| *v).sum::<u64>()));
        });

        group.bench_function(BenchmarkId::new("BTreeMap", size), |b| {
            b.iter(|| black_box(map.values().sum::<u64>()));
        });
    }

    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("removal");
    let size = 10_000;
    let keys = shuffled_keys(size);
    let tree: RbTree<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
    let map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();

    group.bench_function("RbTree", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for key in &keys {
                    tree.remove(key);
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function("BTreeMap", |b| {
        b.iter_batched(
            || map.clone(),
            |mut map| {
                for key in &keys {
                    map.remove(key);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_lookup,
    bench_iteration,
    bench_removal
);
criterion_main!(benches);
