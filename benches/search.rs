//! Benchmarks for offset search, measurement and alignment.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vgrid::layout::{
    estimated_total_size, find_nearest_item, item_metadata, offset_for_index_and_alignment,
    AlignmentRequest, AxisState,
};
use vgrid::types::Align;

/// Row heights that vary without a pattern the search could exploit
fn varied_height(index: usize) -> f64 {
    20.0 + ((index * 7919) % 37) as f64
}

/// Measuring an axis from scratch up to its last item
fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");

    for count in [1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("cold", count), &count, |b, &count| {
            b.iter(|| {
                let mut state = AxisState::rows();
                item_metadata(&mut state, black_box(count - 1), &varied_height)
            })
        });
    }

    group.finish();
}

/// Offset lookups against a fully measured axis (binary path)
fn bench_search_measured(c: &mut Criterion) {
    let count = 1_000_000;
    let mut state = AxisState::rows();
    item_metadata(&mut state, count - 1, &varied_height);
    let total = item_metadata(&mut state, count - 1, &varied_height).end();

    c.bench_function("find_nearest_item_measured", |b| {
        let mut offset = 0.0;
        b.iter(|| {
            offset = (offset + 12_345.6) % total;
            find_nearest_item(&mut state, &varied_height, count, black_box(offset))
        })
    });
}

/// Offset lookups that walk past the watermark (exponential path)
fn bench_search_fresh(c: &mut Criterion) {
    let count = 1_000_000;

    c.bench_function("find_nearest_item_fresh", |b| {
        b.iter(|| {
            let mut state = AxisState::rows();
            find_nearest_item(&mut state, &varied_height, count, black_box(500_000.0))
        })
    });
}

fn bench_estimate(c: &mut Criterion) {
    let mut state = AxisState::rows();
    item_metadata(&mut state, 10_000, &varied_height);

    c.bench_function("estimated_total_size", |b| {
        b.iter(|| estimated_total_size(black_box(&state), 1_000_000))
    });
}

fn bench_alignment(c: &mut Criterion) {
    let count = 100_000;
    let mut state = AxisState::rows();
    let mut group = c.benchmark_group("alignment");

    for align in [Align::Start, Align::End, Align::Center, Align::Auto, Align::Smart] {
        group.bench_with_input(BenchmarkId::new("offset", align), &align, |b, &align| {
            b.iter(|| {
                offset_for_index_and_alignment(
                    &mut state,
                    &varied_height,
                    count,
                    &AlignmentRequest {
                        index: black_box(50_000),
                        align,
                        viewport_size: 800.0,
                        scroll_offset: 0.0,
                        scrollbar_size: 13.0,
                        frozen_offset: 0.0,
                    },
                )
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_measure,
    bench_search_measured,
    bench_search_fresh,
    bench_estimate,
    bench_alignment,
);

criterion_main!(benches);
