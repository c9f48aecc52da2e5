//! Benchmarks for cutting pictures into tiles.
//!
//! # Benchmarks
//!
//! - **`partition`**: Cuts a 2048×1536 gradient picture into every selectable grid
//!   size (3×3 through 6×6). This is the one pixel-copying step of a session.
//! - **`reassemble`**: Pastes the 6×6 tiles back into a full picture.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench partition
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use jigsnap_core::{GridSize, Picture, TileLayout, partition, reassemble};

#[expect(clippy::cast_possible_truncation)]
fn gradient_picture() -> Picture {
    let pixels = RgbaImage::from_fn(2048, 1536, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    Picture::new(pixels).unwrap()
}

fn bench_partition(c: &mut Criterion) {
    let picture = gradient_picture();
    for grid in GridSize::selectable() {
        c.bench_with_input(BenchmarkId::new("partition", grid), &grid, |b, &grid| {
            b.iter(|| partition(hint::black_box(&picture), grid));
        });
    }
}

fn bench_reassemble(c: &mut Criterion) {
    let picture = gradient_picture();
    let grid = GridSize::MAX_SELECTABLE;
    let layout = TileLayout::for_picture(&picture, grid);
    let tiles = partition(&picture, grid);
    c.bench_function("reassemble", |b| {
        b.iter(|| reassemble(hint::black_box(&tiles), &layout));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .plotting_backend(PlottingBackend::Plotters)
        .measurement_time(Duration::from_secs(5));
    targets = bench_partition, bench_reassemble
);
criterion_main!(benches);
