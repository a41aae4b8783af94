//! Game systems.
//!
//! This module groups the ECS systems that advance simulation, input and
//! rendering. The update schedule runs, in order: controller, movement,
//! animation, camera. Input polling, time and rendering run outside the
//! schedule because they need the Raylib handle or the frame delta.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and select the sheet frame
//! - [`camera`] – ease the camera toward the followed entity inside the world
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputsimplecontroller`] – translate held keys into velocity and walk animation
//! - [`movement`] – integrate positions from rigid body velocities and clamp to world bounds
//! - [`render`] – draw the world and debug overlays using Raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod camera;
pub mod input;
pub mod inputsimplecontroller;
pub mod movement;
pub mod render;
pub mod time;
