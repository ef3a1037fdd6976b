use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::distr::Alphanumeric;
use rand::{Rng, SeedableRng};

use artfind::art::Art;
use artfind::ast::AdaptiveSuffixTree;

fn random_keys(count: usize, len: usize) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xA577_2B1E);
    (0..count)
        .map(|_| (&mut rng).sample_iter(Alphanumeric).take(len).map(char::from).collect())
        .collect()
}

fn bench_art_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("art_insert");
    for &count in &[100usize, 1_000, 10_000] {
        let keys = random_keys(count, 16);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &keys, |b, keys| {
            b.iter(|| {
                let mut art: Art<u32> = Art::new();
                for (i, key) in keys.iter().enumerate() {
                    art.insert(black_box(key.as_bytes()), i as u32);
                }
                black_box(art.len())
            });
        });
    }
    group.finish();
}

fn bench_art_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("art_search");
    for &count in &[100usize, 1_000, 10_000] {
        let keys = random_keys(count, 16);
        let mut art: Art<u32> = Art::new();
        for (i, key) in keys.iter().enumerate() {
            art.insert(key.as_bytes(), i as u32);
        }
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &(art, keys), |b, (art, keys)| {
            b.iter(|| {
                let mut found = 0u32;
                for key in keys {
                    if let Some(&v) = art.search(black_box(key.as_bytes())) {
                        found += v;
                    }
                }
                black_box(found)
            });
        });
    }
    group.finish();
}

fn bench_ast_search_suffix(c: &mut Criterion) {
    let mut group = c.benchmark_group("ast_search_suffix");
    let keys = random_keys(500, 24);
    let mut ast = AdaptiveSuffixTree::new();
    for key in &keys {
        ast.insert(key.as_bytes());
    }
    let needles: Vec<&str> = keys.iter().map(|k| &k[k.len() - 4..]).collect();

    group.throughput(Throughput::Elements(needles.len() as u64));
    group.bench_function("suffix_lookup_500_keys", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for needle in &needles {
                total += ast.search_suffix(black_box(needle.as_bytes())).len();
            }
            black_box(total)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_art_insert, bench_art_search, bench_ast_search_suffix);
criterion_main!(benches);
