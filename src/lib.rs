//! Tileroam library.
//!
//! A small top-down 2D scene: procedurally painted textures, a tile and tree
//! layout, and an arrow-key controlled character. This module exposes the
//! ECS components, resources, systems and the game instance for use by the
//! binary and the integration tests.

pub mod components;
pub mod game;
pub mod layout;
pub mod resources;
pub mod systems;
pub mod textures;
