//! Input systems.
//!
//! [`update_input_state`] polls Raylib once per frame and writes the result
//! into [`crate::resources::input::InputState`]. It runs outside the update
//! schedule because the Raylib handle is not stored in the world.
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Poll Raylib for the arrow keys and refresh the `InputState` resource.
pub fn update_input_state(world: &mut World, rl: &raylib::RaylibHandle) {
    let mut input = world.get_resource_or_insert_with(InputState::default);
    input.sample(|key| rl.is_key_down(key));
}
