//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data such as position, rendering,
//! collision, animation and input control.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite-sheet animations
//! - [`boxcollider`] – axis-aligned rectangular collider used for world-bound clamping
//! - [`camerafollow`] – marks the entity the camera tracks
//! - [`group`] – tag component naming the scene layer an entity belongs to
//! - [`inputcontrolled`] – keyboard-driven movement and walk state
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod camerafollow;
pub mod group;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
pub mod zindex;
