//! Hyphenation throughput with cold and warm caches

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shyphen_core::defaults;
use shyphen_engine::{Hyphenator, PatternSet};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size_kb: usize) -> String {
    let base_text = "Hyphenation algorithms insert invisible separators into representative \
                     documentation, improving typography for international publications. ";
    let target_size = size_kb * 1024;
    let repeat_count = target_size / base_text.len() + 1;
    let text = base_text.repeat(repeat_count);
    // base text is ASCII
    text[..target_size].to_string()
}

fn bench_hyphenate(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyphenate");

    for size_kb in [1, 10, 100] {
        let text = generate_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("warm_cache", format!("{size_kb}KB")),
            &text,
            |b, text| {
                let hyphenator = Hyphenator::new();
                hyphenator.hyphenate(text);
                b.iter(|| hyphenator.hyphenate(black_box(text)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("cold_cache", format!("{size_kb}KB")),
            &text,
            |b, text| {
                let hyphenator = Hyphenator::new();
                b.iter(|| {
                    hyphenator.clear_cache();
                    hyphenator.hyphenate(black_box(text))
                });
            },
        );
    }

    group.finish();
}

fn bench_pattern_matching(c: &mut Criterion) {
    let patterns = defaults::patterns();
    let words = ["cupidity", "hyphenation", "representation", "incomprehensibilities"];

    let mut group = c.benchmark_group("break_points");
    for word in words {
        group.bench_with_input(BenchmarkId::from_parameter(word), word, |b, word| {
            b.iter(|| patterns.break_points(black_box(word), 2, 3));
        });
    }
    group.finish();
}

fn bench_pattern_parsing(c: &mut Criterion) {
    c.bench_function("parse_builtin_patterns", |b| {
        b.iter(|| PatternSet::parse(black_box(defaults::PATTERNS_EN_US)))
    });
}

criterion_group!(
    benches,
    bench_hyphenate,
    bench_pattern_matching,
    bench_pattern_parsing
);
criterion_main!(benches);
