//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component controls the drawing order of entities. Entities
//! with higher z-index values are drawn on top of those with lower values.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The renderer sorts by `ZIndex`
/// (painter's algorithm).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const TILES: ZIndex = ZIndex(0);
    pub const DECORATIONS: ZIndex = ZIndex(1);
    pub const ACTORS: ZIndex = ZIndex(2);
}
