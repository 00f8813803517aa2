//! Sprites module: the path-keyed sprite cache and its asset source.
//!
//! This module handles:
//! - Loading the sprite manifest from JSON
//! - Caching resolved image handles per logical key
//! - Releasing every cached handle when the app exits

pub mod cache;
pub mod manifest;
pub mod paths;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

pub use cache::{SpriteCache, SpriteSource};
pub use manifest::{Sprites, setup_sprite_cache};
pub use paths::*;

use crate::core::StartupSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_sprite_cache.in_set(StartupSet::Resources))
            .add_systems(Last, release_sprites_on_exit);
    }
}

/// Clears the cache once, when the app is shutting down.
fn release_sprites_on_exit(mut exits: MessageReader<AppExit>, sprites: Option<ResMut<Sprites>>) {
    if exits.read().next().is_none() {
        return;
    }

    if let Some(mut sprites) = sprites {
        info!("Releasing {} cached sprites", sprites.len());
        sprites.clear();
    }
}
