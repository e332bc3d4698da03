//! Movement of elements in the world.
//! Useful for common or default behaviors of elements in the world.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The movement of granular solids
pub mod solid;

use crate::physics::fallingsand::util::vectors::Coordinates;

/// What a particle did during its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Stayed where it was
    AtRest,
    /// Swapped with the cell at the given coordinate
    MovedTo(Coordinates),
}
