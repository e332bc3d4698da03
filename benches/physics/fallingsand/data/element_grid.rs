use criterion::{black_box, criterion_group, Criterion};
use falling_sand::physics::fallingsand::data::element_grid::{ElementGrid, ElementGridBuilder};
use falling_sand::physics::fallingsand::elements::element::ParticleType;
use falling_sand::physics::fallingsand::util::image::RawImage;
use falling_sand::physics::fallingsand::util::vectors::Coordinates;

/// The default element grid with the top half full of sand and a rock shelf in the middle
fn get_element_grid() -> ElementGrid {
    let mut grid = ElementGridBuilder::new().seed(0).build().unwrap();
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    for y in 0..height / 2 {
        for x in 0..width {
            grid.place_particle(Coordinates::new(x, y), ParticleType::Sand)
                .unwrap();
        }
    }
    for x in width / 4..3 * width / 4 {
        grid.place_particle(Coordinates::new(x, 3 * height / 4), ParticleType::Rock)
            .unwrap();
    }
    grid
}

fn bench_update(c: &mut Criterion) {
    let grid = get_element_grid();
    c.bench_function("element_grid_update", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| black_box(grid.update()),
            criterion::BatchSize::LargeInput,
        )
    });
}

fn bench_update_and_render(c: &mut Criterion) {
    let grid = get_element_grid();
    let cell_size = grid.cell_size();
    let mut canvas = RawImage::new(
        grid.width() as u32 * cell_size,
        grid.height() as u32 * cell_size,
    );
    c.bench_function("element_grid_update_and_render", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| {
                grid.update();
                black_box(grid.render(&mut canvas).unwrap())
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_update, bench_update_and_render);
