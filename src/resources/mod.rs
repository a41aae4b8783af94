//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, rendering
//! handles, the texture cache and configuration.
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles collider outlines and frame stats
//! - `gameconfig` – INI-backed window, world and player settings
//! - `input` – per-frame state of the arrow keys
//! - `screensize` – current framebuffer dimensions in pixels
//! - `texturestore` – generated textures keyed by name
//! - `worldbounds` – the rectangle bodies and camera are confined to
//! - `worldrng` – seeded random source for procedural generation
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod texturestore;
pub mod worldbounds;
pub mod worldrng;
pub mod worldtime;
