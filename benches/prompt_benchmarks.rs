use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bns_prompt::{hash_to_alphabet, find_word_match, find_bns_words, shift_distance, PromptGenerator};

const GENESIS_ROOT: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

fn bench_hash_to_alphabet(c: &mut Criterion) {
    c.bench_function("hash_to_alphabet", |b| {
        b.iter(|| {
            let _ = hash_to_alphabet(black_box(GENESIS_ROOT));
        });
    });
}

fn bench_shift_distance(c: &mut Criterion) {
    c.bench_function("shift_distance", |b| {
        b.iter(|| {
            let _ = shift_distance(black_box('q'), black_box('7'));
        });
    });
}

fn bench_word_match(c: &mut Criterion) {
    let alpha = hash_to_alphabet(GENESIS_ROOT).unwrap_or_default();

    c.bench_function("find_word_match", |b| {
        b.iter(|| {
            let _ = find_word_match(black_box(&alpha), black_box("groove"));
        });
    });
}

fn bench_dictionary_scan(c: &mut Criterion) {
    c.bench_function("find_bns_words", |b| {
        b.iter(|| {
            let _ = find_bns_words(black_box(GENESIS_ROOT), black_box(8));
        });
    });
}

fn bench_generate_prompt(c: &mut Criterion) {
    let generator = PromptGenerator::default();

    c.bench_function("generate_prompt", |b| {
        b.iter(|| {
            let _ = generator.generate(
                black_box(GENESIS_ROOT),
                black_box(840_000u64)
            );
        });
    });
}

criterion_group!(
    benches,
    bench_hash_to_alphabet,
    bench_shift_distance,
    bench_word_match,
    bench_dictionary_scan,
    bench_generate_prompt
);
criterion_main!(benches);
