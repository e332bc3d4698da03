use super::movement::Movement;
use crate::physics::fallingsand::data::element_grid::ElementGrid;
use crate::physics::fallingsand::util::random::RandomSource;
use crate::physics::fallingsand::util::vectors::Coordinates;

/// Literally nothing
pub fn process<R: RandomSource>(_grid: &mut ElementGrid<R>, _pos: Coordinates) -> Movement {
    Movement::AtRest
}
