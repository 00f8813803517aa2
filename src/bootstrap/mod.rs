//! Bootstrap domain: spawns the face, the book panels, the items and the
//! hand from the scene config, then marks the scene ready for input.

mod spawn;

use bevy::prelude::*;

use crate::bootstrap::spawn::spawn_scene;
use crate::core::StartupSet;

pub struct BootstrapPlugin;

impl Plugin for BootstrapPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene.in_set(StartupSet::Scene));
    }
}
