//! Procedural texture generation.
//!
//! Every texture the scene uses is painted at startup from rectangles and
//! circles; no image files are loaded.
//!
//! Submodules overview:
//! - [`surface`] – the [`DrawSurface`](surface::DrawSurface) painting seam and a recording surface for tests
//! - [`character`] – the 16-frame player sprite sheet
//! - [`terrain`] – speckled ground tiles and the tree decoration
//! - [`factory`] – turns painters into textures and registers them in the cache

pub mod character;
pub mod factory;
pub mod surface;
pub mod terrain;

use raylib::prelude::Color;

/// Opaque colour from a `0xRRGGBB` literal.
pub const fn hex(rgb: u32) -> Color {
    Color {
        r: ((rgb >> 16) & 0xff) as u8,
        g: ((rgb >> 8) & 0xff) as u8,
        b: (rgb & 0xff) as u8,
        a: 255,
    }
}
