use super::movement::solid::solid_process;
use super::movement::Movement;
use crate::physics::fallingsand::constants::SAND_COLOR_VARIATION;
use crate::physics::fallingsand::data::element_grid::ElementGrid;
use crate::physics::fallingsand::util::random::RandomSource;
use crate::physics::fallingsand::util::vectors::Coordinates;

pub const COLOR_VARIATION: u8 = SAND_COLOR_VARIATION;

/// Sand is the one material that moves
pub fn process<R: RandomSource>(grid: &mut ElementGrid<R>, pos: Coordinates) -> Movement {
    solid_process(grid, pos)
}
