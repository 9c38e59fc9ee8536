//! Benchmarks for phonetic encoding and batch comparison.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use namesake::{compare, encode, process_batch_with, BatchConfig, BatchRow};

fn sample_names() -> Vec<(&'static str, &'static str)> {
    vec![
        ("short", "Reid"),
        ("english", "Catherine"),
        ("germanic", "Schermerhorn"),
        ("slavic", "Filipowicz"),
        ("spanish", "San Jacinto"),
        ("accented", "François Muñoz"),
        ("long", "Wolfeschlegelsteinhausenbergerdorff"),
    ]
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (label, name) in sample_names() {
        group.bench_with_input(BenchmarkId::from_parameter(label), name, |b, name| {
            b.iter(|| encode(black_box(name)))
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    c.bench_function("compare/muhammad_mohammed", |b| {
        b.iter(|| compare(black_box("Muhammad"), black_box("Mohammed")))
    });
}

fn bench_batch(c: &mut Criterion) {
    let variations = ["Mohammed", "Mohamed", "Muhamad", "Mehmet", "Mahomet"];
    let mut group = c.benchmark_group("process_batch");

    for rows in [10usize, 100, 1000] {
        let batch: Vec<BatchRow> = (0..rows)
            .map(|i| BatchRow::new(format!("Muhammad {i}"), variations))
            .collect();
        group.throughput(Throughput::Elements((rows * variations.len()) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", rows), &batch, |b, batch| {
            let config = BatchConfig {
                parallel_threshold: usize::MAX,
                ..BatchConfig::default()
            };
            b.iter(|| process_batch_with(black_box(batch), &config))
        });
        group.bench_with_input(BenchmarkId::new("parallel", rows), &batch, |b, batch| {
            let config = BatchConfig {
                parallel_threshold: 1,
                ..BatchConfig::default()
            };
            b.iter(|| process_batch_with(black_box(batch), &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_compare, bench_batch);
criterion_main!(benches);
