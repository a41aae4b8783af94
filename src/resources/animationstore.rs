//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems look up an animation by a string key
//! and drive playback based on the immutable parameters stored here.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::textures::character::{FRAME_WIDTH, FRAMES_PER_DIRECTION, Facing};

/// Playback rate shared by every character animation.
pub const CHARACTER_FPS: f32 = 10.0;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a run of frames on a horizontal sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureCache`].
    pub tex_key: Arc<str>,
    /// Index of the first sheet frame.
    pub first_frame: usize,
    /// Number of frames in the animation.
    pub frame_count: usize,
    /// Width of one sheet frame in pixels.
    pub frame_width: f32,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    /// Source x of the `frame_index`-th frame of this animation.
    pub fn frame_x(&self, frame_index: usize) -> f32 {
        (self.first_frame + frame_index) as f32 * self.frame_width
    }
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}

/// The five looping animations of the player sheet.
///
/// `idle` holds the first down-facing frame; each walk runs the four frames
/// of its facing.
pub fn player_animations(tex_key: &str) -> AnimationStore {
    let tex_key: Arc<str> = Arc::from(tex_key);
    let run = |first_frame: usize, frame_count: usize| AnimationResource {
        tex_key: tex_key.clone(),
        first_frame,
        frame_count,
        frame_width: FRAME_WIDTH as f32,
        fps: CHARACTER_FPS,
        looped: true,
    };

    let mut store = AnimationStore::default();
    store.insert("idle", run(Facing::Down.first_frame(), 1));
    for (key, facing) in [
        ("walk-down", Facing::Down),
        ("walk-left", Facing::Left),
        ("walk-right", Facing::Right),
        ("walk-up", Facing::Up),
    ] {
        store.insert(key, run(facing.first_frame(), FRAMES_PER_DIRECTION));
    }
    store
}
