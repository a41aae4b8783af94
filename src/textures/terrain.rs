//! Ground tiles and decorations.

use raylib::prelude::Color;

use super::hex;
use super::surface::DrawSurface;

/// Edge of a ground tile texture in pixels.
pub const TILE_TEXTURE_SIZE: i32 = 32;
/// Edge of the tree texture in pixels.
pub const TREE_TEXTURE_SIZE: i32 = 36;
/// Edge of a tree as drawn in the world.
pub const TREE_DISPLAY_SIZE: f32 = 64.0;

const SPECKLE_MIN: i32 = 2;
const SPECKLE_MAX: i32 = 4;

/// Base colour plus a scatter of small squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    pub base: Color,
    pub speckle: Color,
    pub speckle_count: usize,
}

pub const GRASS: TileStyle = TileStyle {
    base: hex(0x2ecc71),
    speckle: hex(0x27ae60),
    speckle_count: 10,
};

pub const PATH: TileStyle = TileStyle {
    base: hex(0xd35400),
    speckle: hex(0xe67e22),
    speckle_count: 8,
};

const TRUNK: Color = hex(0x8b4513);
const CANOPY_OUTER: Color = hex(0x196f3d);
const CANOPY_INNER: Color = hex(0x229954);

/// Fill a `TILE_TEXTURE_SIZE` square with `style`.
///
/// Speckle corners are drawn in `[0, size - 4]` on both axes and speckle
/// edges in `[2, 4]`, both inclusive.
pub fn paint_speckled_tile(surface: &mut dyn DrawSurface, style: &TileStyle, rng: &mut fastrand::Rng) {
    let size = TILE_TEXTURE_SIZE;
    surface.fill_rect(0.0, 0.0, size as f32, size as f32, style.base);

    let max_corner = size - SPECKLE_MAX;
    for _ in 0..style.speckle_count {
        let x = rng.i32(0..=max_corner);
        let y = rng.i32(0..=max_corner);
        let edge = rng.i32(SPECKLE_MIN..=SPECKLE_MAX);
        surface.fill_rect(x as f32, y as f32, edge as f32, edge as f32, style.speckle);
    }
}

/// Trunk with a two-tone round canopy on a `TREE_TEXTURE_SIZE` square.
pub fn paint_tree(surface: &mut dyn DrawSurface) {
    surface.fill_rect(14.0, 20.0, 8.0, 12.0, TRUNK);
    surface.fill_circle(18.0, 14.0, 12.0, CANOPY_OUTER);
    surface.fill_circle(18.0, 14.0, 8.0, CANOPY_INNER);
}
