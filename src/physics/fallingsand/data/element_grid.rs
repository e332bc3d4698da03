use std::fmt::{self, Debug};

use bevy::log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::physics::fallingsand::constants::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
use crate::physics::fallingsand::elements::element::{update_in_grid, Particle, ParticleType};
use crate::physics::fallingsand::elements::movement::Movement;
use crate::physics::fallingsand::error::GridError;
use crate::physics::fallingsand::renderer::CellRenderer;
use crate::physics::fallingsand::util::enums::ScanDirection;
use crate::physics::fallingsand::util::grid::{Grid, GridOutOfBoundsError};
use crate::physics::fallingsand::util::random::RandomSource;
use crate::physics::fallingsand::util::scan::FrameScan;
use crate::physics::fallingsand::util::vectors::{Coordinates, GridSize};

/// An element grid is a fixed size 2D grid of particles
///
/// It owns every particle in the simulation, the column order the next update will use,
/// and the random source used for colors and tie breaks.
/// The size never changes after it is built.
#[derive(Clone)]
pub struct ElementGrid<R: RandomSource = StdRng> {
    grid: Grid<Particle>,
    cell_size: u32,
    scan_direction: ScanDirection,
    rng: R,
}

impl<R: RandomSource> Debug for ElementGrid<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementGrid")
            .field("size", &self.size())
            .field("cell_size", &self.cell_size)
            .field("scan_direction", &self.scan_direction)
            .finish()
    }
}

/// Everything needed to bring a grid back exactly as it was, except the random source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub scan_direction: ScanDirection,
    /// Row major, top row first
    pub particles: Vec<Particle>,
}

/// A builder for element grids
/// Unset fields fall back to the defaults in [`crate::physics::fallingsand::constants`]
#[derive(Debug, Clone, Copy)]
pub struct ElementGridBuilder {
    width: usize,
    height: usize,
    cell_size: u32,
    seed: Option<u64>,
}

impl Default for ElementGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementGridBuilder {
    pub fn new() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            seed: None,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Side length of one cell when rendered, in pixels
    pub fn cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Seed the default random source, otherwise it is seeded from the OS
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a grid with the default random source
    pub fn build(self) -> Result<ElementGrid<StdRng>, GridError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.build_with_rng(rng)
    }

    /// Build a grid around a caller supplied random source
    /// Any seed set on the builder is ignored
    pub fn build_with_rng<R: RandomSource>(self, rng: R) -> Result<ElementGrid<R>, GridError> {
        let size = validate_dimensions(self.width, self.height, self.cell_size)?;
        debug!(
            "Building {} element grid with {}px cells",
            size, self.cell_size
        );
        Ok(ElementGrid {
            grid: Grid::new_empty(size),
            cell_size: self.cell_size,
            scan_direction: ScanDirection::default(),
            rng,
        })
    }
}

/// Both dimensions have to be non zero and small enough to be addressed by signed coordinates.
/// The rendered canvas has to fit in u32 pixels along both axes.
fn validate_dimensions(width: usize, height: usize, cell_size: u32) -> Result<GridSize, GridError> {
    let max = i32::MAX as usize;
    if width == 0 || height == 0 || width > max || height > max {
        return Err(GridError::InvalidDimensions { width, height });
    }
    if cell_size == 0 {
        return Err(GridError::InvalidCellSize);
    }
    // Both dimensions are at most i32::MAX here so the casts are lossless
    let fits = |cells: usize| (cells as u32).checked_mul(cell_size).is_some();
    if !fits(width) || !fits(height) {
        return Err(GridError::CanvasTooLarge {
            width,
            height,
            cell_size,
        });
    }
    Ok(GridSize::new(width, height))
}

/* Lifecycle */
impl<R: RandomSource> ElementGrid<R> {
    /// Set every cell to empty
    pub fn clear(&mut self) {
        self.grid.fill(Particle::default());
    }

    /// Call once before the first frame
    pub fn initialize(&mut self) {
        debug!("Initializing {} element grid", self.size());
        self.clear();
    }

    /// Call once when shutting down
    pub fn cleanup(&mut self) {
        debug!("Cleaning up {} element grid", self.size());
        self.clear();
    }
}

/* Getters */
impl<R: RandomSource> ElementGrid<R> {
    pub fn width(&self) -> usize {
        self.grid.get_width()
    }
    pub fn height(&self) -> usize {
        self.grid.get_height()
    }
    pub fn size(&self) -> GridSize {
        self.grid.get_size()
    }
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }
    /// The column order the next call to update will use
    pub fn scan_direction(&self) -> ScanDirection {
        self.scan_direction
    }
    /// Every cell alongside its coordinate, row major
    pub fn iter(&self) -> impl Iterator<Item = (Coordinates, &Particle)> + '_ {
        self.grid.indexed_iter()
    }
    /// How many cells hold the given material
    pub fn count(&self, particle_type: ParticleType) -> usize {
        self.grid
            .iter()
            .filter(|particle| particle.particle_type == particle_type)
            .count()
    }
}

/* Queries */
impl<R: RandomSource> ElementGrid<R> {
    pub fn is_in_bounds(&self, coordinates: Coordinates) -> bool {
        self.grid.contains(coordinates)
    }

    /// None if the coordinate is out of bounds
    pub fn get_particle(&self, coordinates: Coordinates) -> Option<&Particle> {
        self.grid.checked_get(coordinates).ok()
    }

    /// True if every cell is empty
    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(Particle::is_empty)
    }

    /// True only if the cell exists and is empty
    /// Cells off the edge of the grid are never empty, so nothing can move off the grid
    pub fn is_particle_empty(&self, coordinates: Coordinates) -> bool {
        self.get_particle(coordinates)
            .map_or(false, Particle::is_empty)
    }
}

/* Modifiers */
impl<R: RandomSource> ElementGrid<R> {
    pub fn set_particle(
        &mut self,
        coordinates: Coordinates,
        particle: Particle,
    ) -> Result<(), GridError> {
        self.grid.checked_replace(coordinates, particle)?;
        Ok(())
    }

    /// Create a particle with a fresh color and put it in the cell
    /// This is the only way new material enters the grid from the outside
    pub fn place_particle(
        &mut self,
        coordinates: Coordinates,
        particle_type: ParticleType,
    ) -> Result<(), GridError> {
        // Check first so a rejected placement does not consume randomness
        if !self.is_in_bounds(coordinates) {
            trace!("Not placing {} outside the grid at {}", particle_type, coordinates);
            return Err(GridError::OutOfBounds(GridOutOfBoundsError {
                coordinates,
                size: self.size(),
            }));
        }
        let particle = particle_type.get_particle(&mut self.rng);
        self.set_particle(coordinates, particle)
    }

    /// Exchange the contents of two cells
    pub fn swap(&mut self, a: Coordinates, b: Coordinates) -> Result<(), GridError> {
        self.grid.checked_swap(a, b)?;
        Ok(())
    }

    /// Draw a tie break from the grid's random source
    pub fn coin_flip(&mut self) -> bool {
        self.rng.coin_flip()
    }
}

/// Handle processing
impl<R: RandomSource> ElementGrid<R> {
    /// Do one frame of simulation
    /// Returns how many particles moved
    pub fn update(&mut self) -> usize {
        let mut moved = 0;
        self.update_with(|grid, pos| {
            if let Movement::MovedTo(_) = update_in_grid(grid, pos) {
                moved += 1;
            }
        });
        trace!("{} particles moved this frame", moved);
        moved
    }

    /// Visit every cell once in update order with a custom rule
    /// Rows go bottom to top, columns follow the current scan direction,
    /// and the scan direction flips afterwards exactly like [`ElementGrid::update`]
    pub fn update_with<F>(&mut self, mut rule: F)
    where
        F: FnMut(&mut Self, Coordinates),
    {
        for pos in FrameScan::new(self.size(), self.scan_direction) {
            rule(self, pos);
        }
        self.scan_direction = self.scan_direction.flipped();
    }
}

/* Drawing */
impl<R: RandomSource> ElementGrid<R> {
    /// Paint every non empty cell as a square
    /// Returns how many cells were painted
    pub fn render<C: CellRenderer + ?Sized>(&self, renderer: &mut C) -> Result<usize, GridError> {
        if !renderer.is_ready() {
            warn!("Renderer is not ready, skipping grid render");
            return Err(GridError::RendererUnavailable);
        }
        let mut drawn = 0;
        for (pos, particle) in self.iter() {
            if !particle.is_empty() {
                particle.render(renderer, pos, self.cell_size);
                drawn += 1;
            }
        }
        Ok(drawn)
    }
}

/* Snapshots */
impl<R: RandomSource> ElementGrid<R> {
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width(),
            height: self.height(),
            cell_size: self.cell_size,
            scan_direction: self.scan_direction,
            particles: self.grid.iter().copied().collect(),
        }
    }

    /// Rebuild a grid from a snapshot
    /// The random source is not part of the snapshot and has to be supplied
    pub fn restore(snapshot: GridSnapshot, rng: R) -> Result<Self, GridError> {
        let size = validate_dimensions(snapshot.width, snapshot.height, snapshot.cell_size)?;
        let expected = size.total_size();
        let actual = snapshot.particles.len();
        let grid = Grid::new_from_vec(size, snapshot.particles).map_err(|_| {
            GridError::SnapshotShape {
                width: size.width,
                height: size.height,
                expected,
                actual,
            }
        })?;
        Ok(Self {
            grid,
            cell_size: snapshot.cell_size,
            scan_direction: snapshot.scan_direction,
            rng,
        })
    }
}
