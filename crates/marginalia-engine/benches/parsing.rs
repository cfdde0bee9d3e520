use criterion::{Criterion, criterion_group, criterion_main};
use marginalia_engine::{NormalizeCache, parse, parse_streaming, realign, Highlight};
use std::hint::black_box;

fn sample_document() -> String {
    let mut doc = String::new();
    for i in 0..40 {
        doc.push_str(&format!("## Section {i}\n\n"));
        doc.push_str("A paragraph with **bold**, `code` and a [link](https://example.com).\n\n");
        doc.push_str("```rust\nlet value = compute();\n```\n\n");
        doc.push_str("- item one\n- item two\n\n");
    }
    doc
}

fn bench_parse(c: &mut Criterion) {
    let doc = sample_document();
    c.bench_function("parse_full_document", |b| {
        b.iter(|| parse(black_box(&doc)))
    });
    c.bench_function("parse_streaming_tail", |b| {
        b.iter(|| parse_streaming(black_box(&doc)))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let doc = sample_document();
    c.bench_function("normalize_cold", |b| {
        b.iter(|| marginalia_engine::normalize(black_box(&doc)))
    });
    c.bench_function("normalize_cached", |b| {
        let mut cache = NormalizeCache::default();
        cache.normalize(&doc);
        b.iter(|| cache.normalize(black_box(&doc)))
    });
}

fn bench_realign(c: &mut Criterion) {
    let rendered = marginalia_engine::normalize(&sample_document());
    let highlights: Vec<Highlight> = (0..20)
        .map(|i| {
            let start = i * 37 % (rendered.len() - 60);
            Highlight::new(&rendered[start..start + 24], "amber", start, start + 24)
        })
        .collect();
    c.bench_function("realign_twenty_highlights", |b| {
        b.iter(|| realign(black_box(&rendered), black_box(&highlights)))
    });
}

criterion_group!(benches, bench_parse, bench_normalize, bench_realign);
criterion_main!(benches);
