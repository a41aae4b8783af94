//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. The camera uses it to centre
//! its offset and to keep the view inside the world.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.w as f32 * 0.5,
            y: self.h as f32 * 0.5,
        }
    }
}
