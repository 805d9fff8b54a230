use criterion::{black_box, criterion_group, criterion_main, Criterion};
use combrank::Spec;
use num_bigint::BigUint;

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation");
    let spec = Spec::permutation(1000);
    let perm: Vec<usize> = (0..1000).rev().collect();
    let rank = spec.rank(&perm).unwrap();

    group.bench_function("rank_1000", |b| {
        b.iter(|| black_box(spec.rank(black_box(&perm)).unwrap()))
    });

    group.bench_function("unrank_1000", |b| {
        b.iter(|| black_box(spec.unrank(black_box(&rank)).unwrap()))
    });
}

fn bench_word(c: &mut Criterion) {
    let mut group = c.benchmark_group("word");
    let word: Vec<usize> = (0..512).map(|i| (i * 7) % 4).collect();
    let spec = Spec::word_from_array(&word).unwrap();
    let rank = spec.rank(&word).unwrap();

    group.bench_function("rank_512x4", |b| {
        b.iter(|| black_box(spec.rank(black_box(&word)).unwrap()))
    });

    group.bench_function("unrank_512x4", |b| {
        b.iter(|| black_box(spec.unrank(black_box(&rank)).unwrap()))
    });
}

fn bench_combination(c: &mut Criterion) {
    let mut group = c.benchmark_group("combination");
    let spec = Spec::combination(64, 8).unwrap();

    group.bench_function("enumerate_first_4096", |b| {
        b.iter(|| {
            for item in spec.enumerate_range(BigUint::from(0u32), BigUint::from(4096u32)) {
                black_box(item.unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_permutation, bench_word, bench_combination);
criterion_main!(benches);
