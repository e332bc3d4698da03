use thiserror::Error;

use super::util::grid::GridOutOfBoundsError;

/// Everything that can go wrong while operating on a grid
/// None of these are fatal, the caller can skip the action and carry on with the next frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(transparent)]
    OutOfBounds(#[from] GridOutOfBoundsError),
    #[error("renderer is not ready to accept draw calls")]
    RendererUnavailable,
    #[error("snapshot holds {actual} particles but a {width}x{height} grid needs {expected}")]
    SnapshotShape {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: usize, height: usize },
    #[error("cell size must be at least one pixel")]
    InvalidCellSize,
    #[error("a {width}x{height} grid of {cell_size}px cells does not fit in a u32 canvas")]
    CanvasTooLarge {
        width: usize,
        height: usize,
        cell_size: u32,
    },
}
