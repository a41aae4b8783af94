//! World bounds resource.
//!
//! The rectangle bodies with `collide_world_bounds` are kept inside, and the
//! area the camera view is confined to.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldBounds(pub Rectangle);

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        WorldBounds(Rectangle {
            x: 0.0,
            y: 0.0,
            width,
            height,
        })
    }
}
