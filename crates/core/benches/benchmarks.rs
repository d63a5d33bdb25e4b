//! Benchmarks for dstamp-core.
//!
//! Run with: `cargo bench -p dstamp-core`
//!
//! Results are saved to `target/criterion/` with HTML reports.

use chrono::{Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dstamp_core::Dstamp;

/// Benchmark inputs representing common query shapes.
const INPUTS: &[(&str, &str)] = &[
    ("time_12h", "5:45am"),
    ("time_24h", "15:00"),
    ("relative_word", "tomorrow"),
    ("offset", "in 5 minutes"),
    ("weekday", "next friday"),
    ("month_day", "dec 15"),
    ("date_with_time", "tomorrow noon"),
    ("no_match", "certainly not a time"),
];

/// Benchmark the full suggest pipeline for each query shape.
fn bench_suggest(c: &mut Criterion) {
    let dstamp = Dstamp::new();
    let anchor = Local.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

    let mut group = c.benchmark_group("suggest");
    for &(name, input) in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| dstamp.suggest_at(black_box(input), anchor));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_suggest);
criterion_main!(benches);
