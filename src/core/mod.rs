//! Core domain: configuration, error taxonomy, entry-point messages and
//! the system ordering shared by every other domain.

mod config;
mod error;
mod events;
mod systems;

pub use config::{BookConfig, FaceConfig, HandConfig, ItemConfig, SceneConfig};
pub use error::{ConfigLoadError, MakeupError};
pub use events::{FaceClicked, ItemClicked, TabClicked};

use bevy::prelude::*;

use crate::core::systems::{load_config_or_default, setup_camera};

/// Startup phases. Resources exist before the scene is spawned, and the
/// scene exists before anything wires itself to it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartupSet {
    Resources,
    Scene,
    Wiring,
}

/// Per-frame phases: clicks become messages, controllers react to them,
/// tweens advance, completion cues are handled, and finally the items and
/// the face carry out what the controllers asked for.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MakeupSet {
    Input,
    Control,
    Animate,
    React,
    Effects,
}

/// Inserted once the bootstrapper has wired the scene; input is ignored
/// until then.
#[derive(Resource, Debug, Default)]
pub struct SceneReady;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(load_config_or_default())
            .add_message::<ItemClicked>()
            .add_message::<FaceClicked>()
            .add_message::<TabClicked>()
            .configure_sets(
                Startup,
                (StartupSet::Resources, StartupSet::Scene, StartupSet::Wiring).chain(),
            )
            .configure_sets(
                Update,
                (
                    MakeupSet::Input,
                    MakeupSet::Control,
                    MakeupSet::Animate,
                    MakeupSet::React,
                    MakeupSet::Effects,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                MakeupSet::Input.run_if(resource_exists::<SceneReady>),
            )
            .add_systems(Startup, setup_camera);
    }
}
