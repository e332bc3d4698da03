use bevy::app::{App, AppExit, Last, Plugin, Startup, Update};
use bevy::asset::{Assets, Handle};
use bevy::core_pipeline::core_2d::Camera2dBundle;
use bevy::ecs::event::{EventReader, EventWriter};
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{Commands, Res, ResMut, Resource};
use bevy::input::keyboard::KeyCode;
use bevy::input::Input;
use bevy::log::{debug, error, info, Level};
use bevy::render::texture::Image;
use bevy::sprite::SpriteBundle;

use crate::physics::fallingsand::constants::{
    CELL_SIZE, COLOR_EMPTY, DISPLAY_TITLE, GRID_HEIGHT, GRID_WIDTH,
};
use crate::physics::fallingsand::data::element_grid::{ElementGrid, ElementGridBuilder};
use crate::physics::fallingsand::error::GridError;
use crate::physics::fallingsand::util::image::RawImage;

/// Settings for the app, read once at startup
#[derive(Resource, Debug, Clone)]
pub struct SandConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    /// None seeds from the OS
    pub seed: Option<u64>,
    pub log_level: Level,
}

impl Default for SandConfig {
    fn default() -> Self {
        Self {
            title: DISPLAY_TITLE.to_string(),
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            seed: None,
            log_level: Level::INFO,
        }
    }
}

impl SandConfig {
    /// The window is exactly big enough to show every cell
    pub fn window_resolution(&self) -> (f32, f32) {
        let (width, height) = self.canvas_size();
        (width as f32, height as f32)
    }

    /// Canvas size in pixels
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.width as u32).saturating_mul(self.cell_size),
            (self.height as u32).saturating_mul(self.cell_size),
        )
    }

    /// Build a grid from these settings
    pub fn build_grid(&self) -> Result<ElementGrid, GridError> {
        let builder = ElementGridBuilder::new()
            .width(self.width)
            .height(self.height)
            .cell_size(self.cell_size);
        match self.seed {
            Some(seed) => builder.seed(seed).build(),
            None => builder.build(),
        }
    }
}

/// The running simulation and the canvas it is drawn on
#[derive(Resource)]
pub struct Sandbox {
    pub grid: ElementGrid,
    pub canvas: RawImage,
    /// The bevy copy of the canvas shown by the sprite
    pub texture: Handle<Image>,
}

impl Sandbox {
    /// Wrap an initialized grid with a canvas that fits it
    pub fn new(mut grid: ElementGrid, texture: Handle<Image>) -> Self {
        grid.initialize();
        let cell_size = grid.cell_size();
        let mut canvas = RawImage::new(
            (grid.width() as u32).saturating_mul(cell_size),
            (grid.height() as u32).saturating_mul(cell_size),
        );
        canvas.clear(COLOR_EMPTY);
        Self {
            grid,
            canvas,
            texture,
        }
    }

    /// Advance the simulation by one frame and redraw the canvas
    /// Returns how many cells were painted
    pub fn step(&mut self) -> Result<usize, GridError> {
        self.grid.update();
        self.canvas.clear(COLOR_EMPTY);
        self.grid.render(&mut self.canvas)
    }
}

/// A plugin that drives the sandbox every frame
pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SandConfig>();
        app.add_systems(Startup, Sandbox::setup_system);
        app.add_systems(
            Update,
            (Sandbox::keyboard_system, Sandbox::process_system).chain(),
        );
        app.add_systems(Last, Sandbox::cleanup_system);
    }
}

/// Bevy Systems
impl Sandbox {
    pub fn setup_system(
        mut commands: Commands,
        config: Res<SandConfig>,
        mut images: ResMut<Assets<Image>>,
        mut exit: EventWriter<AppExit>,
    ) {
        let grid = match config.build_grid() {
            Ok(grid) => grid,
            Err(err) => {
                error!("Could not build the sandbox: {}", err);
                exit.send(AppExit);
                return;
            }
        };
        info!(
            "Starting {} sandbox with {}px cells",
            grid.size(),
            grid.cell_size()
        );

        let mut sandbox = Self::new(grid, Handle::default());
        sandbox.texture = images.add(sandbox.canvas.to_bevy_image());

        commands.spawn(Camera2dBundle::default());
        commands.spawn(SpriteBundle {
            texture: sandbox.texture.clone(),
            ..Default::default()
        });
        commands.insert_resource(sandbox);
    }

    pub fn process_system(sandbox: Option<ResMut<Sandbox>>, mut images: ResMut<Assets<Image>>) {
        let Some(mut sandbox) = sandbox else {
            return;
        };
        if let Err(err) = sandbox.step() {
            debug!("Skipping frame: {}", err);
            return;
        }
        let sandbox = sandbox.into_inner();
        if let Some(image) = images.get_mut(&sandbox.texture) {
            sandbox.canvas.copy_into(image);
        }
    }

    /// C clears the grid, Escape quits
    pub fn keyboard_system(
        keys: Res<Input<KeyCode>>,
        sandbox: Option<ResMut<Sandbox>>,
        mut exit: EventWriter<AppExit>,
    ) {
        if keys.just_pressed(KeyCode::Escape) {
            exit.send(AppExit);
            return;
        }
        if keys.just_pressed(KeyCode::C) {
            if let Some(mut sandbox) = sandbox {
                debug!("Clearing the sandbox");
                sandbox.grid.clear();
            }
        }
    }

    pub fn cleanup_system(mut exit: EventReader<AppExit>, sandbox: Option<ResMut<Sandbox>>) {
        if exit.read().next().is_none() {
            return;
        }
        if let Some(mut sandbox) = sandbox {
            sandbox.grid.cleanup();
        }
    }
}
