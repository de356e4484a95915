use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tickspec::parse_pattern;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for pattern in ["14:30", "**:15", "Monday 9:05", "12:**:45"] {
        group.bench_function(pattern, |b| {
            b.iter(|| parse_pattern(black_box(pattern)).unwrap())
        });
    }
    group.finish();
}

fn bench_is_ready(c: &mut Criterion) {
    let spec = parse_pattern("Wednesday 14:30:00").unwrap();
    let t = NaiveDate::from_ymd_opt(2026, 2, 18)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    c.bench_function("is_ready", |b| {
        b.iter(|| black_box(&spec).is_ready(black_box(&t)))
    });
}

criterion_group!(benches, bench_parse, bench_is_ready);
criterion_main!(benches);
