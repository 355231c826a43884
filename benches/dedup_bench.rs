//! Benchmarks da deduplicação de sentenças.
//!
//! Testa performance de:
//! - Textos com muitas repetições
//! - Textos sem repetição
//! - Separadores de um e de vários caracteres
//!
//! Executar: `cargo bench --bench dedup_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use research_api_plugin::utils::{remove_duplicate_text, split_segments};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// HELPERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Texto com `count` sentenças, das quais só `distinct` são diferentes
fn create_test_text(count: usize, distinct: usize, separator: &str) -> String {
    (0..count)
        .map(|i| format!(" Sentence number {} about research ", i % distinct.max(1)))
        .collect::<Vec<_>>()
        .join(separator)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// BENCHMARK: Deduplicação
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn bench_remove_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_duplicate_text");

    for count in [100, 1_000, 10_000].iter() {
        let repetitive = create_test_text(*count, 10, ".");
        let unique = create_test_text(*count, *count, ".");

        group.throughput(Throughput::Elements(*count as u64));

        group.bench_with_input(
            BenchmarkId::new("repetitive", count),
            &repetitive,
            |bencher, text| bencher.iter(|| black_box(remove_duplicate_text(text, "."))),
        );

        group.bench_with_input(
            BenchmarkId::new("unique", count),
            &unique,
            |bencher, text| bencher.iter(|| black_box(remove_duplicate_text(text, "."))),
        );
    }

    group.finish();
}

fn bench_separators(c: &mut Criterion) {
    let mut group = c.benchmark_group("separators");

    let single = create_test_text(1_000, 50, "\n");
    let multi = create_test_text(1_000, 50, " || ");

    group.bench_function("newline", |bencher| {
        bencher.iter(|| black_box(remove_duplicate_text(&single, "\n")))
    });

    group.bench_function("multi_char", |bencher| {
        bencher.iter(|| black_box(remove_duplicate_text(&multi, " || ")))
    });

    group.bench_function("split_only", |bencher| {
        bencher.iter(|| black_box(split_segments(&multi, " || ").len()))
    });

    group.finish();
}

criterion_group!(benches, bench_remove_duplicates, bench_separators);

criterion_main!(benches);
