use criterion::{black_box, criterion_group, Criterion};
use falling_sand::physics::fallingsand::constants::{
    CELL_SIZE, COLOR_EMPTY, GRID_HEIGHT, GRID_WIDTH,
};
use falling_sand::physics::fallingsand::util::image::RawImage;

/// A canvas the size of the default window
fn get_canvas() -> RawImage {
    RawImage::new(GRID_WIDTH as u32 * CELL_SIZE, GRID_HEIGHT as u32 * CELL_SIZE)
}

fn bench_clear(c: &mut Criterion) {
    let mut canvas = get_canvas();
    c.bench_function("raw_image_clear", |b| {
        b.iter(|| canvas.clear(black_box(COLOR_EMPTY)))
    });
}

fn bench_to_bevy_image(c: &mut Criterion) {
    let canvas = get_canvas();
    c.bench_function("raw_image_to_bevy_image", |b| {
        b.iter(|| black_box(canvas.to_bevy_image()))
    });
}

criterion_group!(benches, bench_clear, bench_to_bevy_image);
