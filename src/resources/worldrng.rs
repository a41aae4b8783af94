//! Random source for procedural generation.
//!
//! Tile kinds, tree positions and terrain speckles all draw from the single
//! [`WorldRng`] so a fixed seed reproduces the whole scene.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug)]
pub struct WorldRng(pub fastrand::Rng);

impl WorldRng {
    /// Seeded when `seed` is given, otherwise seeded from entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => WorldRng(fastrand::Rng::with_seed(seed)),
            None => WorldRng(fastrand::Rng::new()),
        }
    }
}

impl Default for WorldRng {
    fn default() -> Self {
        Self::from_seed(None)
    }
}
