//! Core domain: scene layout and timing loaded from assets/data/scene.ron.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::book::Tab;
use crate::core::error::ConfigLoadError;
use crate::items::ItemKind;
use crate::tween::Ease;

/// Default location of the scene config, relative to the working directory.
pub const SCENE_CONFIG_PATH: &str = "assets/data/scene.ron";

/// Serializable Vec2 for RON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl Vec2Def {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Everything the bootstrapper needs to lay the scene out.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub hand: HandConfig,
    pub face: FaceConfig,
    pub book: BookConfig,
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HandConfig {
    /// Off-screen position the hand slides back to when idle.
    pub hidden_position: Vec2Def,
    /// Where the hand waits while holding a lipstick or eyeshadow.
    pub hold_anchor: Vec2Def,
    /// Grip point relative to the hand origin; items attach here.
    pub grip_offset: Vec2Def,
    pub size: Vec2Def,
    /// Seconds for one full move; flourish steps are fractions of it.
    pub move_duration: f32,
    pub ease: Ease,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    pub position: Vec2Def,
    pub skin_size: Vec2Def,
    pub eyes_offset: Vec2Def,
    pub eyes_size: Vec2Def,
    pub lips_offset: Vec2Def,
    pub lips_size: Vec2Def,
    pub skin_fade_duration: f32,
    pub layer_fade_duration: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    pub eyeshadow_panel: Vec2Def,
    pub lipstick_panel: Vec2Def,
    pub panel_size: Vec2Def,
    pub tab_size: Vec2Def,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    pub kind: ItemKind,
    #[serde(default)]
    pub color_index: u32,
    /// Panel the item rests on; items without one sit on the table.
    #[serde(default)]
    pub panel: Option<Tab>,
    pub position: Vec2Def,
    #[serde(default = "default_item_size")]
    pub size: Vec2Def,
}

fn default_item_size() -> Vec2Def {
    Vec2Def::new(56.0, 56.0)
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            hidden_position: Vec2Def::new(0.0, -560.0),
            hold_anchor: Vec2Def::new(120.0, -140.0),
            grip_offset: Vec2Def::new(0.0, 90.0),
            size: Vec2Def::new(120.0, 200.0),
            move_duration: 0.5,
            ease: Ease::OutQuart,
        }
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            position: Vec2Def::new(-220.0, 40.0),
            skin_size: Vec2Def::new(360.0, 460.0),
            eyes_offset: Vec2Def::new(0.0, 60.0),
            eyes_size: Vec2Def::new(240.0, 70.0),
            lips_offset: Vec2Def::new(0.0, -110.0),
            lips_size: Vec2Def::new(120.0, 50.0),
            skin_fade_duration: 0.6,
            layer_fade_duration: 0.5,
        }
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            eyeshadow_panel: Vec2Def::new(360.0, 60.0),
            lipstick_panel: Vec2Def::new(360.0, 60.0),
            panel_size: Vec2Def::new(300.0, 260.0),
            tab_size: Vec2Def::new(150.0, 44.0),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        let mut items = Vec::new();
        for color_index in 0..4 {
            let x = -90.0 + color_index as f32 * 60.0;
            items.push(ItemConfig {
                kind: ItemKind::EyeShadow,
                color_index,
                panel: Some(Tab::EyeShadows),
                position: Vec2Def::new(x, 40.0),
                size: default_item_size(),
            });
            items.push(ItemConfig {
                kind: ItemKind::Lipstick,
                color_index,
                panel: Some(Tab::Lipsticks),
                position: Vec2Def::new(x, 0.0),
                size: Vec2Def::new(36.0, 90.0),
            });
        }
        items.push(ItemConfig {
            kind: ItemKind::Cream,
            color_index: 0,
            panel: None,
            position: Vec2Def::new(120.0, -260.0),
            size: Vec2Def::new(80.0, 60.0),
        });

        Self {
            hand: HandConfig::default(),
            face: FaceConfig::default(),
            book: BookConfig::default(),
            items,
        }
    }
}

impl SceneConfig {
    /// Non-fatal problems worth a warning at startup.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.items.is_empty() {
            warnings.push("No items assigned".to_string());
        }

        if self.hand.move_duration <= 0.0 {
            warnings.push(format!(
                "hand.move_duration is {}, animations will snap",
                self.hand.move_duration
            ));
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert((item.kind, item.color_index)) {
                warnings.push(format!(
                    "Duplicate item {:?} with color index {}",
                    item.kind, item.color_index
                ));
            }
            let misplaced = matches!(
                (item.kind, item.panel),
                (ItemKind::Lipstick, Some(Tab::EyeShadows))
                    | (ItemKind::EyeShadow, Some(Tab::Lipsticks))
            );
            if misplaced {
                warnings.push(format!(
                    "{:?} {} placed on the {:?} panel",
                    item.kind, item.color_index, item.panel
                ));
            }
        }

        warnings
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a scene config from RON text.
pub fn parse_scene_config(file: &str, contents: &str) -> Result<SceneConfig, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })
}

/// Load the scene config from disk.
pub fn load_scene_config(path: &Path) -> Result<SceneConfig, ConfigLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        file: file.clone(),
        source,
    })?;

    parse_scene_config(&file, &contents)
}
