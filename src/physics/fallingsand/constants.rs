//! Default configuration of the sandbox.

use super::elements::element::Rgba;

/// Default number of columns in the grid
pub const GRID_WIDTH: usize = 200;
/// Default number of rows in the grid
pub const GRID_HEIGHT: usize = 150;
/// Side length of one cell on screen, in pixels
pub const CELL_SIZE: u32 = 4;

pub const DISPLAY_TITLE: &str = "Falling Sand";

pub const COLOR_EMPTY: Rgba = Rgba::new(0, 0, 0, 255);
pub const COLOR_SAND: Rgba = Rgba::new(194, 178, 128, 255);
pub const COLOR_ROCK: Rgba = Rgba::new(110, 110, 110, 255);

/// Each color channel of a new grain of sand is offset by up to this much
pub const SAND_COLOR_VARIATION: u8 = 12;
/// Each color channel of a new rock is offset by up to this much
pub const ROCK_COLOR_VARIATION: u8 = 10;
