//! The visit order of one update pass.
//!
//! Rows go from the bottom of the grid to the top. A particle that falls is therefore
//! moved into a row that has already been visited and is not processed twice in one frame.
//! Inside each row the columns follow the frame's [`ScanDirection`].

use super::enums::ScanDirection;
use super::vectors::{Coordinates, GridSize};

/// Iterator over every cell of a grid, in update order
#[derive(Debug, Clone)]
pub struct FrameScan {
    size: GridSize,
    direction: ScanDirection,
    /// How many cells have been yielded so far
    position: usize,
}

impl FrameScan {
    pub fn new(size: GridSize, direction: ScanDirection) -> Self {
        Self {
            size,
            direction,
            position: 0,
        }
    }
}

impl Iterator for FrameScan {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.size.total_size() {
            return None;
        }
        let row_from_bottom = self.position / self.size.width;
        let column_step = self.position % self.size.width;
        self.position += 1;

        let y = self.size.height - 1 - row_from_bottom;
        let x = match self.direction {
            ScanDirection::LeftToRight => column_step,
            ScanDirection::RightToLeft => self.size.width - 1 - column_step,
        };
        Some(Coordinates::new(x as i32, y as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size.total_size().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameScan {}
