use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pagewise::{Paginator, WordCounter, WordsPerSection};

const LATIN_SENTENCE: &str = "The quick brown fox jumps over the lazy dog 42 times.";
const CJK_SENTENCE: &str = "今天天氣很好我們去公園散步吧。";

/// Alternating Latin and CJK paragraphs, some of them larger than a page
fn mixed_document(paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|i| {
            let sentences = if i % 7 == 0 { 80 } else { 6 };
            let sentence = if i % 2 == 0 { LATIN_SENTENCE } else { CJK_SENTENCE };
            vec![sentence; sentences].join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bench_word_counter(c: &mut Criterion) {
    let counter = WordCounter::new().unwrap();
    let document = mixed_document(200);

    let mut group = c.benchmark_group("word_counter");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("count", |b| b.iter(|| counter.count(black_box(&document))));
    group.finish();
}

fn bench_paginate(c: &mut Criterion) {
    let paginator = Paginator::new().unwrap();
    let document = mixed_document(200);

    let mut group = c.benchmark_group("paginate");
    group.throughput(Throughput::Bytes(document.len() as u64));
    for budget in [100usize, 500, 2000] {
        group.bench_function(format!("budget_{budget}"), |b| {
            b.iter(|| paginator.paginate(black_box(&document), WordsPerSection::from(budget)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_word_counter, bench_paginate);
criterion_main!(benches);
