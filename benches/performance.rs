// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for SPELL
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Chromatic table re-basing
//! - Full interval resolution per key and table
//! - Formula expansion and display formatting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spell::config::Catalog;
use spell::music::{chromatic, dump, make_formula, make_intervals, IntervalType, KEYS};

/// Benchmark re-basing the chromatic table at a key
fn bench_chromatic(c: &mut Criterion) {
    c.bench_function("chromatic_rebase", |b| {
        b.iter(|| chromatic(black_box("Gb")))
    });
}

/// Benchmark resolving every interval label (the core engine)
fn bench_make_intervals(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_intervals");

    for interval_type in IntervalType::ALL {
        group.bench_with_input(
            BenchmarkId::new("single_key", interval_type),
            &interval_type,
            |b, &t| b.iter(|| make_intervals(black_box("F#"), t)),
        );
    }

    group.bench_function("all_keys", |b| {
        b.iter(|| {
            for key in KEYS {
                black_box(make_intervals(key, IntervalType::Major).ok());
            }
        })
    });

    group.finish();
}

/// Benchmark expanding and formatting every catalog chord in one key
fn bench_catalog_chords(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("built-in catalog");
    let resolution = make_intervals("Eb", IntervalType::Major).expect("Eb resolves");

    c.bench_function("catalog_chords_eb", |b| {
        b.iter(|| {
            for formula in catalog.chords.values() {
                if let Ok(notes) = make_formula(black_box(formula), &resolution) {
                    black_box(dump(&notes));
                }
            }
        })
    });
}

criterion_group!(
    benches,
    bench_chromatic,
    bench_make_intervals,
    bench_catalog_chords,
);
criterion_main!(benches);
