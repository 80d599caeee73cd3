//! Performance benchmarks for workout summarization
//!
//! Measures row parsing and full-year aggregation over generated exports
//! of increasing size.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use workout_wrapped::{SummaryEngine, parse_rows};

const EXERCISES: &[&str] = &[
    "Bench Press (Barbell)",
    "Squat (Barbell)",
    "Deadlift (Barbell)",
    "Overhead Press (Barbell)",
    "Pull Up",
    "Bicep Curl (Dumbbell)",
    "Running",
];

/// Generate a Strong-style export with `sets` rows spread over the year
fn generate_export(sets: usize) -> String {
    let mut csv = String::from(
        "Date,Workout Name,Duration,Exercise Name,Set Order,Weight,Reps,Distance,Seconds,Notes,Workout Notes,RPE\n",
    );

    for i in 0..sets {
        let day_of_year = (i / 20) % 365;
        let month = day_of_year / 31 + 1;
        let day = day_of_year % 28 + 1;
        let exercise = EXERCISES[i % EXERCISES.len()];
        let weight = 45 + (i % 12) * 10;
        let reps = 5 + i % 6;
        let distance = if exercise == "Running" { 1000 } else { 0 };
        let rpe = if i % 3 == 0 { String::new() } else { format!("{}", 6 + i % 4) };

        csv.push_str(&format!(
            "2025-{:02}-{:02} 07:30:00,Session,1h {}m,{},{},{},{},{},0,,,{}\n",
            month,
            day,
            i % 60,
            exercise,
            i % 5 + 1,
            weight,
            reps,
            distance,
            rpe
        ));
    }

    csv
}

/// Benchmark row splitting and column lookup alone
fn bench_parse_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rows");

    for sets in &[1_000, 10_000, 50_000] {
        let csv = generate_export(*sets);
        group.throughput(Throughput::Elements(*sets as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sets), &csv, |b, csv| {
            b.iter(|| black_box(parse_rows(black_box(csv)).count()));
        });
    }

    group.finish();
}

/// Benchmark the full summarization of a year
fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    let engine = SummaryEngine::default();

    for sets in &[1_000, 10_000, 50_000] {
        let csv = generate_export(*sets);
        group.throughput(Throughput::Elements(*sets as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sets), &csv, |b, csv| {
            b.iter(|| black_box(engine.summarize(black_box(csv))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_rows, bench_summarize);
criterion_main!(benches);
