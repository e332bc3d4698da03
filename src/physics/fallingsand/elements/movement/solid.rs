use bevy::log::warn;

use super::Movement;
use crate::physics::fallingsand::data::element_grid::ElementGrid;
use crate::physics::fallingsand::util::random::RandomSource;
use crate::physics::fallingsand::util::vectors::Coordinates;

/// Default granular solid behavior
///
/// Falls straight down if it can. Otherwise slides down one of the two diagonals,
/// picking one at random when both are open. Cells off the edge of the grid count
/// as occupied, so nothing ever leaves the grid.
/// The random source is only drawn from when both diagonals are open.
pub fn solid_process<R: RandomSource>(grid: &mut ElementGrid<R>, pos: Coordinates) -> Movement {
    let below = pos + Coordinates::BELOW;

    // On the floor
    if !grid.is_in_bounds(below) {
        return Movement::AtRest;
    }

    let below_left = pos + Coordinates::BELOW_LEFT;
    let below_right = pos + Coordinates::BELOW_RIGHT;

    let is_below_empty = grid.is_particle_empty(below);
    let is_below_left_empty = grid.is_particle_empty(below_left);
    let is_below_right_empty = grid.is_particle_empty(below_right);

    let target = match (is_below_empty, is_below_left_empty, is_below_right_empty) {
        (true, _, _) => below,
        (false, true, true) => {
            if grid.coin_flip() {
                below_left
            } else {
                below_right
            }
        }
        (false, true, false) => below_left,
        (false, false, true) => below_right,
        (false, false, false) => return Movement::AtRest,
    };

    match grid.swap(pos, target) {
        Ok(()) => Movement::MovedTo(target),
        Err(err) => {
            warn!("Could not move particle from {}: {}", pos, err);
            Movement::AtRest
        }
    }
}
