//! Core domain: camera and config setup.

use bevy::prelude::*;
use std::path::Path;

use crate::core::config::{SCENE_CONFIG_PATH, SceneConfig, load_scene_config};

/// Load the scene config, falling back to the built-in layout.
pub(crate) fn load_config_or_default() -> SceneConfig {
    let config = match load_scene_config(Path::new(SCENE_CONFIG_PATH)) {
        Ok(config) => {
            info!(
                "Loaded scene config from {} with {} items",
                SCENE_CONFIG_PATH,
                config.items.len()
            );
            config
        }
        Err(e) => {
            warn!("{}, using default scene", e);
            SceneConfig::default()
        }
    };

    for warning in config.validate() {
        warn!("[SceneConfig] {}", warning);
    }

    config
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
