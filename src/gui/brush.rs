use bevy::app::{App, Plugin, Update};
use bevy::ecs::query::With;
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{Query, Res, ResMut};
use bevy::input::mouse::MouseButton;
use bevy::input::Input;
use bevy::log::trace;
use bevy::math::Vec2;
use bevy::window::{PrimaryWindow, Window};

use crate::entities::sandbox::Sandbox;
use crate::physics::fallingsand::elements::element::ParticleType;
use crate::physics::fallingsand::util::vectors::Coordinates;

/// The brush places one particle under the cursor while a mouse button is held.
/// Left places sand, right places rock.
pub struct BrushPlugin;

impl Plugin for BrushPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            apply_brush_system.before(Sandbox::process_system),
        );
    }
}

/// Convert a cursor position in window pixels, origin top left, into a grid cell
/// The result can be outside the grid, placement checks that
pub fn cursor_to_cell(cursor: Vec2, cell_size: u32) -> Coordinates {
    let cell_size = cell_size.max(1) as f32;
    Coordinates::new(
        (cursor.x / cell_size).floor() as i32,
        (cursor.y / cell_size).floor() as i32,
    )
}

/// Which material the held mouse buttons ask for
/// Left wins when both are held
pub fn selected_particle(mouse: &Input<MouseButton>) -> Option<ParticleType> {
    if mouse.pressed(MouseButton::Left) {
        Some(ParticleType::Sand)
    } else if mouse.pressed(MouseButton::Right) {
        Some(ParticleType::Rock)
    } else {
        None
    }
}

pub fn apply_brush_system(
    mouse: Res<Input<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    sandbox: Option<ResMut<Sandbox>>,
) {
    let Some(particle_type) = selected_particle(&mouse) else {
        return;
    };
    let Some(mut sandbox) = sandbox else {
        return;
    };
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let pos = cursor_to_cell(cursor, sandbox.grid.cell_size());
    if sandbox.grid.place_particle(pos, particle_type).is_ok() {
        trace!("Placed {} at {}", particle_type, pos);
    }
}
