//! Arcade-style kinematic body.
//!
//! The [`RigidBody`] component stores the velocity an entity moves with and
//! whether its [`BoxCollider`](super::boxcollider::BoxCollider) must stay
//! inside the [`WorldBounds`](crate::resources::worldbounds::WorldBounds).
//! There is no gravity and no acceleration: controllers set the velocity
//! directly every frame and the movement system integrates it.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity and world-bound behaviour.
///
/// Intended to be written by input systems and consumed by the
/// [`movement`](crate::systems::movement::movement) system to update
/// [`MapPosition`](super::mapposition::MapPosition).
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new().with_world_bounds();
/// rb.set_velocity_x(-150.0);
/// ```
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// When true, the movement system clamps the body's collider to the
    /// world bounds and zeroes the blocked velocity component.
    pub collide_world_bounds: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest that ignores the world bounds.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            collide_world_bounds: false,
        }
    }

    /// Keep this body inside the world bounds.
    pub fn with_world_bounds(mut self) -> Self {
        self.collide_world_bounds = true;
        self
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    pub fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }

    pub fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = vy;
    }
}
