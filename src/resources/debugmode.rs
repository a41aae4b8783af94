//! Debug toggle resource.
//!
//! Inserted when `[physics] debug = true`. While present the renderer outlines
//! every box collider and prints frame statistics.

use bevy_ecs::prelude::Resource;

/// Marker resource enabling debug overlays.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
