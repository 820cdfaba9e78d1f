//! Benchmark CSV artifact generation and parsing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use familex_core::export::ExportArtifact;
use familex_core::model::{Rating, RatingRecord};

fn records(n: usize) -> Vec<RatingRecord> {
    (0..n)
        .map(|i| {
            let rating = Rating::new((i % 7 + 1) as u8).unwrap();
            RatingRecord::new(format!("word{i}"), rating)
        })
        .collect()
}

fn bench_export(c: &mut Criterion) {
    let session_sized = records(160);
    let large = records(10_000);

    c.bench_function("export_160_records", |b| {
        b.iter(|| ExportArtifact::from_ratings(black_box(&session_sized)))
    });
    c.bench_function("export_10k_records", |b| {
        b.iter(|| ExportArtifact::from_ratings(black_box(&large)))
    });

    let csv = ExportArtifact::from_ratings(&session_sized)
        .csv()
        .to_string();
    c.bench_function("parse_160_records", |b| {
        b.iter(|| ExportArtifact::parse(black_box(&csv)).unwrap())
    });
}

criterion_group!(benches, bench_export);
criterion_main!(benches);
