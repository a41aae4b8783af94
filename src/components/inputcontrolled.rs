//! Input-controlled movement components.
//!
//! - [`InputControlled`] – keyboard-driven movement at a fixed speed per axis
//! - [`WalkState`] – which of the five walk states the entity is in
//!
//! The system in [`crate::systems::inputsimplecontroller`] reads these
//! components to update entity velocities and animations.

use bevy_ecs::prelude::Component;

/// Movement intent derived from player keyboard input.
///
/// `speed` is applied independently on each held axis, so diagonal movement
/// is faster than axis-aligned movement.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Speed in world units per second on each axis.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

/// Walk state of an input-controlled character.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WalkState {
    #[default]
    Idle,
    WalkUp,
    WalkDown,
    WalkLeft,
    WalkRight,
}

impl WalkState {
    pub const ALL: [WalkState; 5] = [
        WalkState::Idle,
        WalkState::WalkUp,
        WalkState::WalkDown,
        WalkState::WalkLeft,
        WalkState::WalkRight,
    ];

    /// Key of the animation that plays in this state.
    pub fn animation_key(self) -> &'static str {
        match self {
            WalkState::Idle => "idle",
            WalkState::WalkUp => "walk-up",
            WalkState::WalkDown => "walk-down",
            WalkState::WalkLeft => "walk-left",
            WalkState::WalkRight => "walk-right",
        }
    }
}
