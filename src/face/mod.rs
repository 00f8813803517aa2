//! Face domain: the skin, eyes and lips layers that receive makeup.

mod look;
mod systems;

pub use look::{FaceEffect, FaceLook};

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::{FaceConfig, MakeupSet};
use crate::face::systems::{apply_makeup, hide_faded_skin};
use crate::hand::{FaceTargets, LayerRect};
use crate::items::ItemKind;

/// Message asking the face to apply a product.
#[derive(Debug, Clone, Copy)]
pub struct ApplyMakeup {
    pub kind: ItemKind,
    pub color_index: u32,
}

impl Message for ApplyMakeup {}

/// World-space geometry of the face layers.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    pub skin: LayerRect,
    pub eyes: LayerRect,
    pub lips: LayerRect,
}

impl FaceLayout {
    pub fn from_config(config: &FaceConfig) -> Self {
        let center: Vec2 = config.position.into();
        Self {
            skin: LayerRect::new(center, config.skin_size.into()),
            eyes: LayerRect::new(
                center + Vec2::from(config.eyes_offset),
                config.eyes_size.into(),
            ),
            lips: LayerRect::new(
                center + Vec2::from(config.lips_offset),
                config.lips_size.into(),
            ),
        }
    }

    pub fn targets(&self) -> FaceTargets {
        FaceTargets {
            center: self.skin.center,
            skin: self.skin,
            lips: self.lips,
        }
    }
}

/// Layer entities under the face root.
#[derive(Component, Debug, Clone, Copy)]
pub struct FaceLayers {
    pub skin: Entity,
    pub eyes: Entity,
    pub lips: Entity,
}

/// Fade timings for the face layers.
#[derive(Component, Debug, Clone, Copy)]
pub struct FaceFades {
    pub skin: f32,
    pub layer: f32,
}

pub struct FacePlugin;

impl Plugin for FacePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ApplyMakeup>().add_systems(
            Update,
            (apply_makeup.in_set(MakeupSet::Effects), hide_faded_skin.in_set(MakeupSet::React)),
        );
    }
}
