//! Per-frame keyboard input resource.
//!
//! Captures the arrow keys the game reacts to and exposes them to systems via
//! the [`InputState`] resource. The state is refreshed once per frame by
//! [`update_input_state`](crate::systems::input::update_input_state).
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held down this frame.
    pub active: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

/// Snapshot of which direction keys are held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Resource capturing the per-frame state of the four arrow keys.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound(KeyboardKey::KEY_UP),
            direction_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            direction_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            direction_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
        }
    }
}

impl InputState {
    /// Refresh every binding from a key-down predicate.
    ///
    /// The predicate is usually `|k| rl.is_key_down(k)`; tests pass a closure.
    pub fn sample(&mut self, is_down: impl Fn(KeyboardKey) -> bool) {
        for state in [
            &mut self.direction_up,
            &mut self.direction_down,
            &mut self.direction_left,
            &mut self.direction_right,
        ] {
            state.active = is_down(state.key_binding);
        }
    }

    pub fn held(&self) -> HeldDirections {
        HeldDirections {
            up: self.direction_up.active,
            down: self.direction_down.active,
            left: self.direction_left.active,
            right: self.direction_right.active,
        }
    }
}
