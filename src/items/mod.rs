//! Items domain: pickable makeup products and their take/put-back lifecycle.

mod actions;

pub use actions::{ItemAction, ItemActionKind, apply_item_actions};

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::MakeupSet;
use crate::sprites::{SpriteCache, SpriteSource, brush_key, eyes_key, lip_key};

/// Product types the hand knows how to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ItemKind {
    Cream,
    Lipstick,
    EyeShadow,
    /// A product with no face effect; the hand still carries it.
    Other,
}

impl ItemKind {
    /// Sprite the face will need when this product is applied.
    pub fn effect_sprite_key(self, color_index: u32) -> Option<String> {
        match self {
            ItemKind::Lipstick => Some(lip_key(color_index)),
            ItemKind::EyeShadow => Some(eyes_key(color_index)),
            ItemKind::Cream | ItemKind::Other => None,
        }
    }

    /// Resolve this product's sprites ahead of first use.
    pub fn preload<S: SpriteSource>(self, color_index: u32, sprites: &mut SpriteCache<S>) {
        if let Some(key) = self.effect_sprite_key(color_index) {
            sprites.preload(&key);
        }
    }
}

/// Component for a pickable product.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    pub color_index: u32,
}

impl Item {
    /// Sprite for the loaded-brush indicator shown once an eyeshadow has
    /// been picked up. Other products have no indicator.
    pub fn brush_sprite<S: SpriteSource>(&self, sprites: &mut SpriteCache<S>) -> Option<S::Sprite> {
        if self.kind != ItemKind::EyeShadow {
            return None;
        }

        let sprite = sprites.load(&brush_key(self.color_index));
        if sprite.is_none() {
            warn!(
                "[EyeShadowItem] Failed to load brush color sprite for index {}",
                self.color_index
            );
        }
        sprite
    }
}

/// Where an item lives when it is not in the hand. Captured once at spawn.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RestPose {
    /// Container the item is parented to while resting.
    pub parent: Entity,
    /// Local translation under `parent`.
    pub translation: Vec3,
    /// World position, used as the hand's target.
    pub world: Vec2,
}

impl RestPose {
    /// Capture the rest pose of an item placed at `translation` under a
    /// parent whose origin is at `parent_origin`.
    pub fn capture(parent: Entity, parent_origin: Vec2, translation: Vec3) -> Self {
        Self {
            parent,
            translation,
            world: parent_origin + translation.truncate(),
        }
    }
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeldState {
    #[default]
    AtRest,
    Held,
}

/// Points at the "loaded brush" sprite of an eyeshadow item.
#[derive(Component, Debug, Clone, Copy)]
pub struct ItemBrush {
    pub indicator: Entity,
}

/// Marker for the brush indicator sprite.
#[derive(Component, Debug)]
pub struct BrushIndicator;

pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ItemAction>()
            .add_systems(Update, apply_item_actions.in_set(MakeupSet::Effects));
    }
}
