use std::fmt;

use derive_more::{Add, Sub};
use serde::{Deserialize, Serialize};

/// My personal coordinate type
/// x is the column, positive is to the right
/// y is the row, positive is down, so row 0 is the top of the grid
/// Signed so that neighbors of edge cells can be expressed and then rejected by a bounds check
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Add, Sub, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

/// Convienient constants
impl Coordinates {
    pub const ZERO: Self = Self { x: 0, y: 0 };
    pub const BELOW: Self = Self { x: 0, y: 1 };
    pub const BELOW_LEFT: Self = Self { x: -1, y: 1 };
    pub const BELOW_RIGHT: Self = Self { x: 1, y: 1 };
}

impl Coordinates {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The width and height of a grid, measured in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Whether or not the coordinate addresses a cell of a grid this size
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        coordinates.x >= 0
            && coordinates.y >= 0
            && (coordinates.x as usize) < self.width
            && (coordinates.y as usize) < self.height
    }

    /// Get the total number of cells
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis aligned rectangle in pixel space, origin top left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// The square covering one cell of the grid
    pub fn from_cell(coordinates: Coordinates, cell_size: u32) -> Self {
        debug_assert!(coordinates.x >= 0 && coordinates.y >= 0);
        Self {
            x: coordinates.x as u32 * cell_size,
            y: coordinates.y as u32 * cell_size,
            width: cell_size,
            height: cell_size,
        }
    }
}
