//! Kinematic movement.
//!
//! Integrates [`RigidBody`] velocities into [`MapPosition`]s and keeps bodies
//! flagged with `collide_world_bounds` inside [`WorldBounds`]. A body pushed
//! against a bound loses the velocity component along that axis.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody, Option<&BoxCollider>)>,
    time: Res<WorldTime>,
    bounds: Option<Res<WorldBounds>>,
) {
    for (mut position, mut rigidbody, maybe_collider) in query.iter_mut() {
        let delta = rigidbody.velocity.scale_by(time.delta);
        position.pos = position.pos + delta;

        if !rigidbody.collide_world_bounds {
            continue;
        }
        let (Some(world_bounds), Some(collider)) = (bounds.as_ref(), maybe_collider) else {
            continue;
        };
        let (clamped, blocked_x, blocked_y) = collider.clamp_into(position.pos, world_bounds.0);
        if blocked_x {
            rigidbody.set_velocity_x(0.0);
        }
        if blocked_y {
            rigidbody.set_velocity_y(0.0);
        }
        position.pos = clamped;
    }
}
