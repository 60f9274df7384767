use criterion::{black_box, criterion_group, criterion_main, Criterion};

use protfeat::features::{self, FeatureOpt, SequenceRecord};
use protfeat::util::vocab;

fn make_protein(len: usize, seed: u32) -> String {
    let residues = b"ACDEFGHIKLMNPQRSTVWY";
    let mut x: u32 = seed;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            residues[(x >> 16) as usize % residues.len()] as char
        })
        .collect()
}

fn make_batch(n: usize) -> Vec<SequenceRecord> {
    (0..n)
        .map(|i| SequenceRecord::new(format!("p{}", i), make_protein(100 + (i * 37) % 400, i as u32 + 1)))
        .collect()
}

fn bench_one_hot(c: &mut Criterion) {
    let v = vocab::build_vocabulary();
    let seq = make_protein(300, 42);

    c.bench_function("one_hot_300aa_pad_500", |b| {
        b.iter(|| {
            black_box(features::one_hot_encode(black_box(&seq), 500, &v));
        })
    });
}

fn bench_composition(c: &mut Criterion) {
    let v = vocab::build_vocabulary();
    let seq = make_protein(300, 7);

    c.bench_function("letter_composition_300aa", |b| {
        b.iter(|| {
            black_box(features::letter_composition(black_box(&seq), &v));
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let batch = make_batch(1_000);

    c.bench_function("process_sequences_1k", |b| {
        b.iter(|| {
            black_box(features::process_sequences(black_box(&batch)).ok());
        })
    });

    let opt = FeatureOpt { threads: 4 };
    c.bench_function("process_sequences_1k_4threads", |b| {
        b.iter(|| {
            black_box(features::process_sequences_with_opt(black_box(&batch), &opt).ok());
        })
    });
}

criterion_group!(benches, bench_one_hot, bench_composition, bench_batch);
criterion_main!(benches);
