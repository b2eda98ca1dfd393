//! Criterion benchmarks for Retrosprite critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Compositor: symbol grid to canvas
//! - Recolor: per-pixel skin transforms
//! - Scale: nearest-neighbor upscaling
//! - Sheet: animation sequencing and packing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ordermap::OrderMap;
use retrosprite::animation::sequence;
use retrosprite::character::{self, palettes, sparse, Source};
use retrosprite::compositor::compose;
use retrosprite::recolor::{LinearShift, Recolor, SaturationSplit};
use retrosprite::scale::scale;
use retrosprite::spritesheet::pack;

// =============================================================================
// Compositor Benchmarks
// =============================================================================

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let master = palettes::master();

    group.bench_function("sparse_base", |b| {
        let grid = sparse::base();
        b.iter(|| compose(black_box(&grid), &master))
    });

    let rows = character::animations(Source::Rows);
    let white = palettes::white();
    if let Some(frame) = rows.first().and_then(|a| a.frames.first()) {
        let grid = frame.grid();
        group.bench_function("dense_idle", |b| b.iter(|| compose(black_box(&grid), &white)));
    }

    group.finish();
}

// =============================================================================
// Recolor Benchmarks
// =============================================================================

fn bench_recolor(c: &mut Criterion) {
    let mut group = c.benchmark_group("recolor");
    let canvas = compose(&sparse::base(), &palettes::master());
    group.throughput(Throughput::Elements(u64::from(canvas.width() * canvas.height())));

    let transforms = [
        ("linear_pink", Recolor::Linear(LinearShift::PINK)),
        ("saturation_white", Recolor::Saturation(SaturationSplit::WHITE)),
        ("fade_half", Recolor::FADE_HALF),
        (
            "chain",
            Recolor::Chain(vec![Recolor::Linear(LinearShift::DEATH_FLASH), Recolor::FADE_HALF]),
        ),
    ];
    for (name, transform) in transforms.iter() {
        group.bench_function(*name, |b| b.iter(|| transform.recolor(black_box(&canvas))));
    }

    group.finish();
}

// =============================================================================
// Scale Benchmarks
// =============================================================================

fn bench_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale");
    let canvas = compose(&sparse::base(), &palettes::master());

    for factor in [1u32, 2, 3, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::new("nearest", factor), factor, |b, &factor| {
            b.iter(|| scale(black_box(&canvas), factor))
        });
    }

    group.finish();
}

// =============================================================================
// Sheet Benchmarks
// =============================================================================

fn bench_sheet(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet");

    for source in [Source::Rows, Source::Sparse] {
        let animations = character::animations(source);
        let variants = character::variants(source);
        let Some(variant) = variants.last() else {
            continue;
        };

        group.bench_function(format!("sequence_all_{}", source), |b| {
            b.iter(|| {
                animations
                    .iter()
                    .map(|a| sequence(black_box(a), variant, 1))
                    .collect::<Vec<_>>()
            })
        });

        let frames: OrderMap<String, _> = animations
            .iter()
            .map(|a| (a.name.clone(), sequence(a, variant, 1)))
            .collect();
        group.bench_function(format!("pack_{}", source), |b| b.iter(|| pack(black_box(&frames))));
    }

    group.finish();
}

criterion_group!(benches, bench_compose, bench_recolor, bench_scale, bench_sheet);
criterion_main!(benches);
