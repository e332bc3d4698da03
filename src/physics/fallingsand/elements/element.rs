use bevy::render::color::Color;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::movement::Movement;
use super::{empty, rock, sand};
use crate::physics::fallingsand::constants::{COLOR_EMPTY, COLOR_ROCK, COLOR_SAND};
use crate::physics::fallingsand::data::element_grid::ElementGrid;
use crate::physics::fallingsand::renderer::CellRenderer;
use crate::physics::fallingsand::util::functions::offset_color_component;
use crate::physics::fallingsand::util::random::RandomSource;
use crate::physics::fallingsand::util::vectors::{Coordinates, PixelRect};

/// An 8 bit per channel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Offsets each of red, green and blue independently by up to `variation`, in that order
    /// Alpha is left alone
    pub fn vary(self, variation: u8, rng: &mut impl RandomSource) -> Self {
        let r = offset_color_component(self.r, rng.offset(variation));
        let g = offset_color_component(self.g, rng.offset(variation));
        let b = offset_color_component(self.b, rng.offset(variation));
        Self::new(r, g, b, self.a)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::rgba_u8(color.r, color.g, color.b, color.a)
    }
}

/// The material in a cell
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ParticleType {
    #[default]
    Empty,
    Rock,
    Sand,
}

impl ParticleType {
    /// The color of the material before any variation
    pub fn get_default_color(&self) -> Rgba {
        match self {
            ParticleType::Empty => COLOR_EMPTY,
            ParticleType::Rock => COLOR_ROCK,
            ParticleType::Sand => COLOR_SAND,
        }
    }

    /// How far each channel of a new particle may stray from the default color
    pub fn get_color_variation(&self) -> Option<u8> {
        match self {
            ParticleType::Empty => None,
            ParticleType::Rock => Some(rock::COLOR_VARIATION),
            ParticleType::Sand => Some(sand::COLOR_VARIATION),
        }
    }

    /// A freshly varied color for a new particle of this material
    /// Empty never varies and never draws from the random source
    pub fn get_random_color(&self, rng: &mut impl RandomSource) -> Rgba {
        match self.get_color_variation() {
            Some(variation) => self.get_default_color().vary(variation, rng),
            None => self.get_default_color(),
        }
    }

    /// Build a new particle of this material
    pub fn get_particle(&self, rng: &mut impl RandomSource) -> Particle {
        Particle::new(*self, self.get_random_color(rng))
    }
}

/// The value stored in each cell
/// The color is only for show and is fixed when the particle is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Particle {
    pub particle_type: ParticleType,
    pub color: Rgba,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(ParticleType::Empty, COLOR_EMPTY)
    }
}

impl Particle {
    pub const fn new(particle_type: ParticleType, color: Rgba) -> Self {
        Self {
            particle_type,
            color,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.particle_type == ParticleType::Empty
    }

    /// Paint this particle as one filled square
    pub fn render<C: CellRenderer + ?Sized>(
        &self,
        renderer: &mut C,
        coordinates: Coordinates,
        cell_size: u32,
    ) {
        renderer.fill_rect(PixelRect::from_cell(coordinates, cell_size), self.color);
    }
}

/// Run the transition rule for whatever occupies the cell
pub fn update_in_grid<R: RandomSource>(
    grid: &mut ElementGrid<R>,
    coordinates: Coordinates,
) -> Movement {
    let particle_type = match grid.get_particle(coordinates) {
        Some(particle) => particle.particle_type,
        None => return Movement::AtRest,
    };
    match particle_type {
        ParticleType::Empty => empty::process(grid, coordinates),
        ParticleType::Rock => rock::process(grid, coordinates),
        ParticleType::Sand => sand::process(grid, coordinates),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::physics::fallingsand::constants::{ROCK_COLOR_VARIATION, SAND_COLOR_VARIATION};
    use crate::physics::fallingsand::renderer::RecordingRenderer;
    use crate::physics::fallingsand::util::random::ScriptedSource;

    #[test]
    fn test_default_is_empty() {
        let particle = Particle::default();
        assert!(particle.is_empty());
        assert_eq!(particle.color, COLOR_EMPTY);
        assert_eq!(ParticleType::default(), ParticleType::Empty);
    }

    #[test]
    fn test_only_empty_is_empty() {
        for particle_type in ParticleType::iter() {
            let particle = Particle::new(particle_type, particle_type.get_default_color());
            assert_eq!(particle.is_empty(), particle_type == ParticleType::Empty);
        }
    }

    /// Each case is (material, scripted offset, expected channel offset)
    mod random_color {
        use super::*;

        fn expected(base: Rgba, offset: i32) -> Rgba {
            let channel = |c: u8| (i32::from(c) + offset).clamp(0, 255) as u8;
            Rgba::new(channel(base.r), channel(base.g), channel(base.b), base.a)
        }

        macro_rules! test_random_color {
            ($name:ident, $particle_type:expr, $offset:expr) => {
                #[test]
                fn $name() {
                    let particle_type: ParticleType = $particle_type;
                    let offset: i16 = $offset;
                    let mut rng = ScriptedSource::with_offsets([offset, offset, offset]);
                    let color = particle_type.get_random_color(&mut rng);
                    assert_eq!(
                        color,
                        expected(particle_type.get_default_color(), i32::from(offset))
                    );
                }
            };
        }

        test_random_color!(test_sand_center, ParticleType::Sand, 0);
        test_random_color!(
            test_sand_max_positive,
            ParticleType::Sand,
            SAND_COLOR_VARIATION as i16
        );
        test_random_color!(
            test_sand_max_negative,
            ParticleType::Sand,
            -(SAND_COLOR_VARIATION as i16)
        );
        test_random_color!(test_rock_center, ParticleType::Rock, 0);
        test_random_color!(
            test_rock_max_positive,
            ParticleType::Rock,
            ROCK_COLOR_VARIATION as i16
        );
        test_random_color!(
            test_rock_max_negative,
            ParticleType::Rock,
            -(ROCK_COLOR_VARIATION as i16)
        );
    }

    #[test]
    fn test_channels_vary_independently() {
        let mut rng = ScriptedSource::with_offsets([1, -2, 3]);
        let color = ParticleType::Sand.get_random_color(&mut rng);
        assert_eq!(
            color,
            Rgba::new(
                COLOR_SAND.r + 1,
                COLOR_SAND.g - 2,
                COLOR_SAND.b + 3,
                COLOR_SAND.a
            )
        );
    }

    #[test]
    fn test_empty_color_is_fixed() {
        let mut rng = ScriptedSource::with_offsets([5, 5, 5]);
        assert_eq!(ParticleType::Empty.get_random_color(&mut rng), COLOR_EMPTY);
        // The offsets were never drawn, so they are still there for the next particle
        assert_eq!(
            ParticleType::Sand.get_random_color(&mut rng).r,
            COLOR_SAND.r + 5
        );
    }

    #[test]
    fn test_alpha_is_fixed() {
        let mut rng = ScriptedSource::with_offsets([12; 6]);
        assert_eq!(ParticleType::Sand.get_random_color(&mut rng).a, COLOR_SAND.a);
        assert_eq!(ParticleType::Rock.get_random_color(&mut rng).a, COLOR_ROCK.a);
    }

    #[test]
    fn test_get_particle() {
        let mut rng = ScriptedSource::default();
        let particle = ParticleType::Rock.get_particle(&mut rng);
        assert_eq!(particle.particle_type, ParticleType::Rock);
        assert_eq!(particle.color, COLOR_ROCK);
    }

    #[test]
    fn test_render_paints_one_square() {
        let mut renderer = RecordingRenderer::new();
        let particle = Particle::new(ParticleType::Sand, COLOR_SAND);
        particle.render(&mut renderer, Coordinates::new(2, 3), 4);
        assert_eq!(
            renderer.calls,
            vec![(
                PixelRect {
                    x: 8,
                    y: 12,
                    width: 4,
                    height: 4
                },
                COLOR_SAND
            )]
        );
    }

    #[test]
    fn test_into_bevy_color() {
        let color: Color = Rgba::new(255, 0, 0, 255).into();
        assert_eq!(color.as_rgba_u8(), [255, 0, 0, 255]);
    }
}
