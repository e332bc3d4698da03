use super::movement::Movement;
use crate::physics::fallingsand::constants::ROCK_COLOR_VARIATION;
use crate::physics::fallingsand::data::element_grid::ElementGrid;
use crate::physics::fallingsand::util::random::RandomSource;
use crate::physics::fallingsand::util::vectors::Coordinates;

pub const COLOR_VARIATION: u8 = ROCK_COLOR_VARIATION;

// Rock does nothing
pub fn process<R: RandomSource>(_grid: &mut ElementGrid<R>, _pos: Coordinates) -> Movement {
    Movement::AtRest
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::physics::fallingsand::data::element_grid::ElementGridBuilder;
    use crate::physics::fallingsand::elements::element::ParticleType;

    fn assert_no_movement(x: i32, y: i32) {
        let mut grid = ElementGridBuilder::new()
            .width(20)
            .height(10)
            .build_with_rng(StdRng::seed_from_u64(0))
            .unwrap();
        let pos = Coordinates::new(x, y);
        grid.place_particle(pos, ParticleType::Rock).unwrap();
        let before = *grid.get_particle(pos).unwrap();

        for _ in 0..10 {
            grid.update();
        }

        assert_eq!(*grid.get_particle(pos).unwrap(), before);
        assert_eq!(grid.count(ParticleType::Rock), 1);
    }

    macro_rules! test_no_movement {
        ($name:ident, $pos:expr) => {
            #[test]
            fn $name() {
                assert_no_movement($pos.0, $pos.1);
            }
        };
    }

    test_no_movement!(test_no_movement_mid_air, (10, 2));
    test_no_movement!(test_no_movement_on_floor, (10, 9));
    test_no_movement!(test_no_movement_in_corner, (0, 0));
}
