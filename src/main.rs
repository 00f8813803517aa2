mod book;
mod bootstrap;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod face;
mod hand;
mod input;
mod items;
mod sprites;
mod tween;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Makeup Simulator".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        sprites::SpritesPlugin,
        tween::TweenPlugin,
        items::ItemsPlugin,
        face::FacePlugin,
        hand::HandPlugin,
        book::BookPlugin,
        input::InputPlugin,
        bootstrap::BootstrapPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
