//! Path-keyed sprite cache.
//!
//! The cache sits between the game components and whatever actually loads
//! images. It guarantees one entry per logical path and hands every dropped
//! entry back to its source for release.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::core::MakeupError;

/// Resolves logical sprite paths into loaded sprites.
pub trait SpriteSource: Send + Sync + 'static {
    type Sprite: Clone + Send + Sync + 'static;

    /// Resolve `path`. Only called on a cache miss.
    fn resolve(&mut self, path: &str) -> Result<Self::Sprite, MakeupError>;

    /// Release a sprite the cache no longer holds.
    fn release(&mut self, path: &str, sprite: Self::Sprite);
}

/// Resource mapping sprite paths to loaded sprites.
#[derive(Resource)]
pub struct SpriteCache<S: SpriteSource> {
    source: S,
    entries: HashMap<String, S::Sprite>,
}

impl<S: SpriteSource> SpriteCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: HashMap::new(),
        }
    }

    /// Make sure `path` is resolved ahead of first use. Failures are logged.
    pub fn preload(&mut self, path: &str) {
        let _ = self.load(path);
    }

    /// Cached sprite for `path`, resolving it on a miss. Returns `None` on an
    /// empty path or a missing asset.
    pub fn load(&mut self, path: &str) -> Option<S::Sprite> {
        match self.try_load(path) {
            Ok(sprite) => Some(sprite),
            Err(MakeupError::EmptyPath) => {
                error!("[SpriteCache] {}", MakeupError::EmptyPath);
                None
            }
            Err(e) => {
                warn!("[SpriteCache] {}", e);
                None
            }
        }
    }

    /// Like [`SpriteCache::load`], but reports why the sprite is absent.
    pub fn try_load(&mut self, path: &str) -> Result<S::Sprite, MakeupError> {
        if path.is_empty() {
            return Err(MakeupError::EmptyPath);
        }

        if let Some(sprite) = self.entries.get(path) {
            return Ok(sprite.clone());
        }

        let sprite = self.source.resolve(path)?;
        self.entries.insert(path.to_string(), sprite.clone());
        Ok(sprite)
    }

    /// Release and forget `path`. No-op if it was never cached.
    #[allow(dead_code)]
    pub fn unload(&mut self, path: &str) {
        if let Some(sprite) = self.entries.remove(path) {
            self.source.release(path, sprite);
        }
    }

    /// Release every cached sprite.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        for (path, sprite) in self.entries.drain() {
            self.source.release(&path, sprite);
        }
        debug!("[SpriteCache] Released {} sprites", count);
    }

    #[cfg(test)]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }
}
