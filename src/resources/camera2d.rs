//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. The follow system moves its target; the
//! renderer reads it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Rectangle, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy, Debug)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera whose `offset` is the screen centre, so `target` is the world
    /// point shown in the middle of the view.
    pub fn centered(offset: Vector2, target: Vector2) -> Self {
        Camera2DRes(Camera2D {
            offset,
            target,
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}

/// Clamp a camera target so the visible area stays inside `bounds`.
///
/// `half_view` is half the visible size in world units. On an axis where the
/// view is larger than the bounds the target is centred on the bounds.
pub fn clamp_target(target: Vector2, half_view: Vector2, bounds: Rectangle) -> Vector2 {
    fn axis(value: f32, half: f32, min: f32, len: f32) -> f32 {
        if len <= half * 2.0 {
            min + len * 0.5
        } else {
            value.clamp(min + half, min + len - half)
        }
    }
    Vector2 {
        x: axis(target.x, half_view.x, bounds.x, bounds.width),
        y: axis(target.y, half_view.y, bounds.y, bounds.height),
    }
}
