//! Camera follow target component.
//!
//! The entity carrying [`CameraFollow`] is tracked by the
//! [`camera_follow`](crate::systems::camera::camera_follow) system.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Marks the entity the camera follows and how it follows it.
#[derive(Component, Clone, Copy, Debug)]
pub struct CameraFollow {
    /// Fraction of the remaining distance covered each frame, per axis.
    /// 1.0 locks the camera to the target.
    pub lerp: Vector2,
    /// Snap the camera target to whole pixels.
    pub round_pixels: bool,
}

impl CameraFollow {
    pub fn new(lerp_x: f32, lerp_y: f32) -> Self {
        Self {
            lerp: Vector2 {
                x: lerp_x,
                y: lerp_y,
            },
            round_pixels: true,
        }
    }
}
