//! Benchmarks for insertion, lookup, prefix iteration and erasure.
//!
//! Run with: `cargo bench --bench trie_benches`

use compact_trie::Trie;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random lowercase words over a small alphabet so that prefixes are shared.
fn words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x7472_6965);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'h') as char).collect()
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_insert");

    for size in [1_000, 10_000] {
        let input = words(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut trie = Trie::new();
                for word in input {
                    trie.insert(black_box(word));
                }
                trie
            });
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_find");

    for size in [1_000, 10_000] {
        let input = words(size);
        let trie: Trie = input.iter().collect();
        let probes = words(256);
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &probes, |b, probes| {
            b.iter(|| {
                probes
                    .iter()
                    .filter(|probe| trie.contains(black_box(probe)))
                    .count()
            });
        });
    }

    group.finish();
}

fn bench_iter_prefix(c: &mut Criterion) {
    let trie: Trie = words(10_000).iter().collect();
    let mut group = c.benchmark_group("trie_iter_prefix");

    for prefix in ["", "a", "abc", "hhhh"] {
        group.bench_with_input(BenchmarkId::from_parameter(prefix), &prefix, |b, prefix| {
            b.iter(|| trie.iter_prefix(black_box(prefix)).count());
        });
    }

    group.finish();
}

fn bench_erase(c: &mut Criterion) {
    let input = words(10_000);
    let trie: Trie = input.iter().collect();

    c.bench_function("trie_erase_all", |b| {
        b.iter_batched(
            || trie.clone(),
            |mut trie| {
                for word in &input {
                    trie.erase(black_box(word));
                }
                trie
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_find,
    bench_iter_prefix,
    bench_erase
);
criterion_main!(benches);
