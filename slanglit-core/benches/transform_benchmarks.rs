//! Throughput of slang transformation and its building blocks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use slanglit_core::{builtin_table, tokenize, TransformConfig, Transformer};
use std::hint::black_box;

const SLANG_TEXT: &str = "Мы чиллим с крашем уже 2 часа. Я хейтил этот кринж весь вечер! \
    Они агрятся из-за этого зашквара, а мы из-за хорошего вайба. ";

const PLAIN_TEXT: &str = "Привет, как дела? Мы гуляли по городу и смотрели на реку весь вечер. ";

/// Repeat a sample until the text is at least `size_kb` kilobytes
fn generate_text(sample: &str, size_kb: usize) -> String {
    let repeat_count = size_kb * 1024 / sample.len() + 1;
    sample.repeat(repeat_count)
}

fn bench_transform_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_by_size");
    let transformer = Transformer::new(builtin_table());

    for size_kb in [1, 10, 100] {
        let text = generate_text(SLANG_TEXT, size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size_kb}KB")),
            &text,
            |b, text| b.iter(|| transformer.transform(black_box(text))),
        );
    }

    group.finish();
}

fn bench_slang_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("slang_density");
    let transformer = Transformer::new(builtin_table());

    for (name, sample) in [("plain", PLAIN_TEXT), ("slang", SLANG_TEXT)] {
        let text = generate_text(sample, 10);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| transformer.transform(black_box(text)))
        });
    }

    group.finish();
}

fn bench_configurations(c: &mut Criterion) {
    let mut group = c.benchmark_group("configurations");
    let text = generate_text(SLANG_TEXT, 10);

    for (name, config) in [
        ("default", TransformConfig::default()),
        ("strict", TransformConfig::strict()),
        ("annotate", TransformConfig::annotate()),
    ] {
        let transformer = Transformer::with_config(builtin_table(), config);
        group.bench_function(name, |b| b.iter(|| transformer.transform(black_box(&text))));
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let text = generate_text(SLANG_TEXT, 100);
    c.bench_function("tokenize_100KB", |b| b.iter(|| tokenize(black_box(&text)).len()));
}

criterion_group!(
    benches,
    bench_transform_by_size,
    bench_slang_density,
    bench_configurations,
    bench_tokenize
);
criterion_main!(benches);
