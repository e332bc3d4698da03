use bevy::{log::LogPlugin, prelude::*};
use falling_sand::entities::sandbox::{SandConfig, SandboxPlugin};
use falling_sand::gui::brush::BrushPlugin;

fn main() {
    let config = SandConfig::default();
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: config.log_level,
                    ..Default::default()
                })
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.title.clone(),
                        resolution: config.window_resolution().into(),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(config)
        .add_plugins((SandboxPlugin, BrushPlugin))
        .run();
}
