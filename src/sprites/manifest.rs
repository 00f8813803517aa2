//! Sprite manifest loading and the AssetServer-backed sprite source.
//!
//! The manifest maps logical sprite keys (e.g. "Face/Lips/lip_3") to image
//! files under assets/. A key is only resolvable if it is listed and its
//! file exists on disk, so a missing asset is reported instead of quietly
//! rendering Bevy's placeholder texture.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{ConfigLoadError, MakeupError};
use crate::sprites::cache::{SpriteCache, SpriteSource};

/// Default manifest location, relative to the working directory.
pub const SPRITE_MANIFEST_PATH: &str = "assets/sprites/manifest.json";

/// Root that manifest file paths are relative to.
pub const ASSET_ROOT: &str = "assets";

/// Known sprite keys and their files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpriteManifest {
    /// Version of the manifest schema.
    pub version: u32,
    /// Map of sprite keys to image paths, relative to assets/.
    pub sprites: HashMap<String, String>,
}

impl SpriteManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(file: &str, contents: &str) -> Result<Self, ConfigLoadError> {
        serde_json::from_str(contents).map_err(|e| ConfigLoadError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })
    }

    /// Load the manifest from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let file = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            file: file.clone(),
            source,
        })?;
        Self::from_json(&file, &contents)
    }

    /// Image path for a sprite key.
    pub fn file_for(&self, key: &str) -> Option<&str> {
        self.sprites.get(key).map(String::as_str)
    }
}

/// Sprite source that loads images through the AssetServer.
pub struct AssetSprites {
    server: AssetServer,
    manifest: SpriteManifest,
    asset_root: PathBuf,
}

impl AssetSprites {
    pub fn new(
        server: AssetServer,
        manifest: SpriteManifest,
        asset_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            server,
            manifest,
            asset_root: asset_root.into(),
        }
    }
}

impl SpriteSource for AssetSprites {
    type Sprite = Handle<Image>;

    fn resolve(&mut self, path: &str) -> Result<Handle<Image>, MakeupError> {
        let file = self
            .manifest
            .file_for(path)
            .ok_or_else(|| MakeupError::MissingAsset(path.to_string()))?;

        if !self.asset_root.join(file).exists() {
            return Err(MakeupError::MissingAsset(path.to_string()));
        }

        Ok(self.server.load(file.to_string()))
    }

    fn release(&mut self, path: &str, sprite: Handle<Image>) {
        // Dropping the last strong handle lets the asset server unload it.
        debug!("[SpriteCache] Releasing {} ({:?})", path, sprite.id());
        drop(sprite);
    }
}

/// The sprite cache used by the game.
pub type Sprites = SpriteCache<AssetSprites>;

/// System to build the sprite cache at startup.
pub fn setup_sprite_cache(mut commands: Commands, asset_server: Res<AssetServer>) {
    let manifest = match SpriteManifest::load_from_file(Path::new(SPRITE_MANIFEST_PATH)) {
        Ok(manifest) => {
            info!(
                "Loaded sprite manifest v{} with {} sprites",
                manifest.version,
                manifest.sprites.len()
            );
            manifest
        }
        Err(e) => {
            warn!("{}, every sprite will be reported missing", e);
            SpriteManifest::default()
        }
    };

    commands.insert_resource(Sprites::new(AssetSprites::new(
        asset_server.clone(),
        manifest,
        ASSET_ROOT,
    )));
}
