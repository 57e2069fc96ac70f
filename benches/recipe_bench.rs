// ABOUTME: Criterion benchmarks for amount conversion, version diffing and duplicate search
// ABOUTME: Measures the hot paths hit on every recipe view and save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the Heirloom engines.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{library, recipe};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use heirloom::fraction::{format_decimal_to_fraction, parse_amount_str};
use heirloom::models::ScaleFactor;
use heirloom::scaling::display_amount;
use heirloom::similarity::{find_duplicates, SimilarityConfig};
use heirloom::versioning::compare_versions;

const AMOUNT_INPUTS: [&str; 8] = ["2", "1.5", "3/4", "1 1/2", "1-2", "½", "2⅓", "a pinch"];

/// Benchmark parsing and formatting amounts
fn bench_amount_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("amount_conversion");

    group.bench_function("parse_mixed_inputs", |b| {
        b.iter(|| {
            AMOUNT_INPUTS
                .iter()
                .filter_map(|input| parse_amount_str(black_box(input)))
                .sum::<f64>()
        });
    });

    group.bench_function("format_eighths", |b| {
        b.iter(|| {
            (1..=64_u32)
                .map(|step| format_decimal_to_fraction(Some(black_box(f64::from(step) / 8.0))))
                .map(|text| text.len())
                .sum::<usize>()
        });
    });

    group.bench_function("display_scaled_thirds", |b| {
        b.iter(|| {
            ScaleFactor::ALL
                .iter()
                .map(|&scale| display_amount(Some(black_box(1.0 / 3.0)), scale, None))
                .count()
        });
    });

    group.finish();
}

/// Benchmark snapshot comparison at increasing recipe sizes
fn bench_version_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("version_diff");

    for size in [5_usize, 20, 80] {
        let older = recipe(1, size);
        let newer = recipe(2, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("compare_versions", size),
            &(older, newer),
            |b, (older, newer)| {
                b.iter(|| compare_versions(black_box(older), black_box(newer)));
            },
        );
    }

    group.finish();
}

/// Benchmark duplicate detection over libraries of increasing size
fn bench_duplicate_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicate_search");
    group.sample_size(50);

    let config = SimilarityConfig::default();
    let candidate = recipe(7, 12);
    for count in [100_usize, 1_000] {
        let existing = library(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("find_duplicates", count),
            &existing,
            |b, existing| {
                b.iter(|| find_duplicates(black_box(&candidate), existing, &config));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_amount_conversion,
    bench_version_diff,
    bench_duplicate_search
);
criterion_main!(benches);
