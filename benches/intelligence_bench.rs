// ABOUTME: Criterion benchmarks for the pace, VDOT, and training calculations
// ABOUTME: Measures the pure algorithms and the workout table a calculator fetches on every solve
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Marathon Training Planner Contributors

//! Criterion benchmarks for the calculation crate.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planner_core::formatters::mask_time_input;
use planner_core::models::{PaceUnit, PercentageMethod};
use planner_intelligence::algorithms::{
    calculate_vdot, heart_rate_zones, long_run_splits, parse_clock, race_pace, training_paces,
    workout_paces,
};

/// Standard race distances in meters
const RACE_DISTANCES: [(&str, f64); 4] = [
    ("5K", 5000.0),
    ("10K", 10_000.0),
    ("Half", 21_097.5),
    ("Marathon", 42_195.0),
];

fn bench_clock_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock");
    group.bench_function("parse_h_mm_ss", |b| {
        b.iter(|| parse_clock(black_box("3:24:35")));
    });
    group.bench_function("mask_time_input", |b| {
        b.iter(|| mask_time_input(black_box("3a2:4-35")));
    });
    group.finish();
}

fn bench_race_pace(c: &mut Criterion) {
    let mut group = c.benchmark_group("race_pace");
    for (name, meters) in RACE_DISTANCES {
        group.bench_with_input(BenchmarkId::from_parameter(name), &meters, |b, &meters| {
            b.iter(|| race_pace(black_box("3:15:00"), PaceUnit::Mile, meters));
        });
    }
    group.finish();
}

fn bench_vdot(c: &mut Criterion) {
    let mut group = c.benchmark_group("vdot");
    for (name, meters) in RACE_DISTANCES {
        group.bench_with_input(BenchmarkId::new("calculate", name), &meters, |b, &meters| {
            b.iter(|| calculate_vdot(meters, black_box(meters * 0.24)));
        });
    }
    group.bench_function("training_paces", |b| {
        b.iter(|| training_paces(black_box(50.0), PaceUnit::Kilometer));
    });
    group.finish();
}

fn bench_training_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("training_tables");
    for method in [PercentageMethod::Pace, PercentageMethod::Speed] {
        group.bench_with_input(
            BenchmarkId::new("workout_paces", method),
            &method,
            |b, &method| {
                b.iter(|| workout_paces(black_box("6:00"), method));
            },
        );
    }
    group.bench_function("long_run_20mi", |b| {
        b.iter(|| long_run_splits(black_box(20), "7:00", PaceUnit::Mile));
    });
    group.bench_function("heart_rate_zones", |b| {
        b.iter(|| heart_rate_zones(black_box(185)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_clock_parsing,
    bench_race_pace,
    bench_vdot,
    bench_training_tables,
);
criterion_main!(benches);
