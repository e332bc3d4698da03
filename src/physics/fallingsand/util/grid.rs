//! A simple 2d grid type
//! The ndarray crate is used as the backend, stored row major with shape (height, width).
//! Every position based access goes through a bounds check on signed [`Coordinates`]
//! before an index is formed, so there is no unchecked indexing outside of this module.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use thiserror::Error;

use super::vectors::{Coordinates, GridSize};

/// A simple 2d grid type
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T>(ndarray::Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid with the given size, and fill it with the given row major data
    pub fn new_from_vec(size: GridSize, data: Vec<T>) -> Result<Self, ndarray::ShapeError> {
        ndarray::Array2::from_shape_vec((size.height, size.width), data).map(Self)
    }
    /// Create a new grid with the given size, and fill it with default values
    pub fn new_empty(size: GridSize) -> Self
    where
        T: Default,
    {
        Self(ndarray::Array2::from_shape_simple_fn(
            (size.height, size.width),
            T::default,
        ))
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the width of the grid
    pub fn get_width(&self) -> usize {
        self.0.shape()[1]
    }
    /// Get the height of the grid
    pub fn get_height(&self) -> usize {
        self.0.shape()[0]
    }
    /// Get the width and height together
    pub fn get_size(&self) -> GridSize {
        GridSize::new(self.get_width(), self.get_height())
    }
}

/// Defines when the user has simply exceeded the bounds of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{coordinates} went outside the constraints of the {size} grid")]
pub struct GridOutOfBoundsError {
    /// The offending coordinate
    pub coordinates: Coordinates,
    /// The size of the grid it was checked against
    pub size: GridSize,
}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid<T> {
    /// Whether or not the coordinate is inside the grid
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        self.get_size().contains(coordinates)
    }
    /// Gets the value at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, coordinates: Coordinates) -> Result<&T, GridOutOfBoundsError> {
        let idx = self.checked_index(coordinates)?;
        Ok(&self.0[idx])
    }
    /// Sets the value at the given coordinate and gives you ownership of the original value
    pub fn checked_replace(
        &mut self,
        coordinates: Coordinates,
        replacement: T,
    ) -> Result<T, GridOutOfBoundsError> {
        let idx = self.checked_index(coordinates)?;
        Ok(std::mem::replace(&mut self.0[idx], replacement))
    }
    /// Exchanges the values at two coordinates
    /// Both are checked before anything moves
    pub fn checked_swap(&mut self, a: Coordinates, b: Coordinates) -> Result<(), GridOutOfBoundsError> {
        let idx_a = self.checked_index(a)?;
        let idx_b = self.checked_index(b)?;
        self.0.swap(idx_a, idx_b);
        Ok(())
    }
    /// Overwrites every cell with the value
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.0.fill(value);
    }
    /// Transforms the coordinate to the ndarray coordinate system
    fn checked_index(&self, coordinates: Coordinates) -> Result<[usize; 2], GridOutOfBoundsError> {
        if !self.contains(coordinates) {
            return Err(GridOutOfBoundsError {
                coordinates,
                size: self.get_size(),
            });
        }
        Ok([coordinates.y as usize, coordinates.x as usize])
    }
}

/// Iteration
impl<T> Grid<T> {
    /// Get an iterator over the grid in row major order
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, ndarray::Ix2> {
        self.0.iter()
    }

    /// Get an iterator over the grid in row major order, alongside each cell's coordinate
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Coordinates, &T)> + '_ {
        self.0
            .indexed_iter()
            .map(|((y, x), value)| (Coordinates::new(x as i32, y as i32), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter() {
        let grid = Grid::new_from_vec(GridSize::new(2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
        let mut iter = grid.iter();

        assert_eq!(*iter.next().unwrap(), 1);
        assert_eq!(*iter.next().unwrap(), 2);
        assert_eq!(*iter.next().unwrap(), 3);
        assert_eq!(*iter.next().unwrap(), 4);
        assert_eq!(*iter.next().unwrap(), 5);
        assert_eq!(*iter.next().unwrap(), 6);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_row_major_layout() {
        let grid = Grid::new_from_vec(GridSize::new(2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(grid.get_width(), 2);
        assert_eq!(grid.get_height(), 3);
        assert_eq!(*grid.checked_get(Coordinates::new(1, 0)).unwrap(), 2);
        assert_eq!(*grid.checked_get(Coordinates::new(0, 2)).unwrap(), 5);

        let (coords, value) = grid.indexed_iter().nth(3).unwrap();
        assert_eq!(coords, Coordinates::new(1, 1));
        assert_eq!(*value, 4);
    }

    #[test]
    fn test_wrong_shape() {
        assert!(Grid::new_from_vec(GridSize::new(2, 3), vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid: Grid<u8> = Grid::new_empty(GridSize::new(4, 4));
        let outside = Coordinates::new(4, 0);
        let err = grid.checked_get(outside).unwrap_err();
        assert_eq!(err.coordinates, outside);
        assert_eq!(err.size, GridSize::new(4, 4));
        assert!(grid.checked_get(Coordinates::new(0, -1)).is_err());
        assert!(grid.checked_replace(outside, 1).is_err());
        assert!(grid.iter().all(|v| *v == 0));
    }

    #[test]
    fn test_swap_is_all_or_nothing() {
        let mut grid = Grid::new_from_vec(GridSize::new(2, 2), vec![1, 2, 3, 4]).unwrap();
        grid.checked_swap(Coordinates::new(0, 0), Coordinates::new(1, 1))
            .unwrap();
        assert_eq!(grid.iter().copied().collect::<Vec<_>>(), vec![4, 2, 3, 1]);

        assert!(grid
            .checked_swap(Coordinates::new(0, 0), Coordinates::new(2, 0))
            .is_err());
        assert_eq!(grid.iter().copied().collect::<Vec<_>>(), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_fill() {
        let mut grid: Grid<u8> = Grid::new_empty(GridSize::new(3, 2));
        grid.fill(7);
        assert_eq!(grid.iter().filter(|v| **v == 7).count(), 6);
    }
}
