//! Simple input-to-velocity controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! turns the held arrow keys into a velocity and a walk animation for every
//! entity with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component.
//!
//! Each axis is resolved on its own: left wins over right, up wins over down.
//! Diagonal movement is not normalized. Horizontal walk animations take
//! priority over vertical ones.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::inputcontrolled::{InputControlled, WalkState};
use crate::components::rigidbody::RigidBody;
use crate::resources::input::{HeldDirections, InputState};

/// Velocity and walk state for the given held keys.
pub fn resolve_walk(held: HeldDirections, speed: f32) -> (Vector2, WalkState) {
    let mut velocity = Vector2::zero();
    let mut state = WalkState::Idle;

    if held.left {
        velocity.x = -speed;
        state = WalkState::WalkLeft;
    } else if held.right {
        velocity.x = speed;
        state = WalkState::WalkRight;
    }

    let horizontal = held.left || held.right;
    if held.up {
        velocity.y = -speed;
        if !horizontal {
            state = WalkState::WalkUp;
        }
    } else if held.down {
        velocity.y = speed;
        if !horizontal {
            state = WalkState::WalkDown;
        }
    }

    if velocity.x == 0.0 && velocity.y == 0.0 {
        state = WalkState::Idle;
    }
    (velocity, state)
}

/// Update each controlled entity's velocity, walk state and animation.
pub fn input_simple_controller(
    mut query: Query<(
        &InputControlled,
        &mut RigidBody,
        &mut WalkState,
        Option<&mut Animation>,
    )>,
    input_state: Res<InputState>,
) {
    let held = input_state.held();
    for (controlled, mut rigidbody, mut walk, maybe_animation) in query.iter_mut() {
        let (velocity, state) = resolve_walk(held, controlled.speed);
        rigidbody.set_velocity(velocity);
        if *walk != state {
            *walk = state;
        }
        if let Some(mut animation) = maybe_animation {
            animation.play(state.animation_key());
        }
    }
}
