//! Face domain: what the face currently shows and how products change it.

use bevy::prelude::*;

use crate::items::ItemKind;
use crate::sprites::{SpriteCache, SpriteSource, eyes_key, lip_key};

/// Component tracking applied makeup.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct FaceLook {
    pub skin_visible: bool,
    pub lips: Option<u32>,
    pub eyes: Option<u32>,
}

impl Default for FaceLook {
    fn default() -> Self {
        Self {
            skin_visible: true,
            lips: None,
            eyes: None,
        }
    }
}

/// Visual change the face layers should play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceEffect<T> {
    FadeOutSkin,
    ShowLips(T),
    ShowEyes(T),
    Unchanged,
}

impl FaceLook {
    /// Apply a product. Sprites that fail to resolve leave the look as is.
    pub fn apply_item<S: SpriteSource>(
        &mut self,
        kind: ItemKind,
        color_index: u32,
        sprites: &mut SpriteCache<S>,
    ) -> FaceEffect<S::Sprite> {
        match kind {
            ItemKind::Cream => {
                if !self.skin_visible {
                    return FaceEffect::Unchanged;
                }
                // There is no way back: the skin stays off for the session.
                self.skin_visible = false;
                FaceEffect::FadeOutSkin
            }
            ItemKind::Lipstick => match sprites.load(&lip_key(color_index)) {
                Some(sprite) => {
                    self.lips = Some(color_index);
                    FaceEffect::ShowLips(sprite)
                }
                None => {
                    warn!(
                        "[Face] Failed to load lipstick sprite for color index {}",
                        color_index
                    );
                    FaceEffect::Unchanged
                }
            },
            ItemKind::EyeShadow => match sprites.load(&eyes_key(color_index)) {
                Some(sprite) => {
                    self.eyes = Some(color_index);
                    FaceEffect::ShowEyes(sprite)
                }
                None => {
                    warn!(
                        "[Face] Failed to load eye shadow sprite for color index {}",
                        color_index
                    );
                    FaceEffect::Unchanged
                }
            },
            ItemKind::Other => {
                warn!("[Face] Unknown item type: {:?}", kind);
                FaceEffect::Unchanged
            }
        }
    }
}
