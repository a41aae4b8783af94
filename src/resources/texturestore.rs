//! Texture cache keyed by name.
//!
//! Generated textures are created once and reused for the life of the game
//! instance. [`TextureCache::get_or_try_insert_with`] is the only way new
//! entries are created, so a name is never generated twice.

use bevy_ecs::prelude::Resource;
use log::debug;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Name-keyed store of textures of type `T`.
///
/// Generic over the texture type so headless tests can cache plain values.
#[derive(Resource)]
pub struct TextureCache<T: Send + Sync + 'static> {
    pub map: FxHashMap<String, T>,
}

/// The cache used by the game: GPU textures uploaded through raylib.
pub type TextureStore = TextureCache<Texture2D>;

impl<T: Send + Sync + 'static> Default for TextureCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> TextureCache<T> {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Return the texture stored under `name`, creating it with `create` if
    /// absent. A failed creation leaves the cache untouched.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        name: &str,
        create: impl FnOnce() -> Result<T, E>,
    ) -> Result<&T, E> {
        match self.map.entry(name.to_string()) {
            Entry::Occupied(entry) => {
                debug!("texture '{}' already cached", name);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let texture = create()?;
                debug!("texture '{}' generated", name);
                Ok(entry.insert(texture))
            }
        }
    }
}
