//! World layout planning.
//!
//! Decides where ground tiles and trees go, without touching the ECS. The
//! scene turns the plans into entities.

use raylib::prelude::{Rectangle, Vector2};

use crate::textures::factory::{GRASS_TEXTURE, PATH_TEXTURE};

/// Range (inclusive) tree centres are drawn from.
pub const TREE_MIN: Vector2 = Vector2 { x: 50.0, y: 50.0 };
pub const TREE_MAX: Vector2 = Vector2 { x: 750.0, y: 550.0 };

/// Open area around the player's start that stays free of trees. A centre
/// strictly inside this rectangle is rejected.
pub const TREE_EXCLUSION: Rectangle = Rectangle {
    x: 300.0,
    y: 200.0,
    width: 200.0,
    height: 200.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Grass,
    Path,
}

impl TileKind {
    pub fn texture(self) -> &'static str {
        match self {
            TileKind::Grass => GRASS_TEXTURE,
            TileKind::Path => PATH_TEXTURE,
        }
    }
}

/// One ground tile, centred in its grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub center: Vector2,
    pub kind: TileKind,
}

/// Walk the grid row by row and pick a kind for every cell.
///
/// A cell is path when a uniform draw in `[0, 1)` exceeds `path_threshold`.
pub fn plan_tiles(
    rng: &mut fastrand::Rng,
    width: u32,
    height: u32,
    tile_size: u32,
    path_threshold: f32,
) -> Vec<TilePlacement> {
    if tile_size == 0 {
        return Vec::new();
    }
    let step = tile_size as usize;
    let half = tile_size as f32 * 0.5;
    let mut tiles = Vec::new();
    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            let kind = if rng.f32() > path_threshold {
                TileKind::Path
            } else {
                TileKind::Grass
            };
            tiles.push(TilePlacement {
                center: Vector2 {
                    x: x as f32 + half,
                    y: y as f32 + half,
                },
                kind,
            });
        }
    }
    tiles
}

pub fn in_tree_exclusion(pos: Vector2) -> bool {
    pos.x > TREE_EXCLUSION.x
        && pos.x < TREE_EXCLUSION.x + TREE_EXCLUSION.width
        && pos.y > TREE_EXCLUSION.y
        && pos.y < TREE_EXCLUSION.y + TREE_EXCLUSION.height
}

/// Draw `count` candidate tree centres and keep those outside
/// [`TREE_EXCLUSION`]. Rejected draws are not retried.
pub fn plan_trees(rng: &mut fastrand::Rng, count: u32) -> Vec<Vector2> {
    (0..count)
        .map(|_| Vector2 {
            x: rng.i32(TREE_MIN.x as i32..=TREE_MAX.x as i32) as f32,
            y: rng.i32(TREE_MIN.y as i32..=TREE_MAX.y as i32) as f32,
        })
        .filter(|pos| !in_tree_exclusion(*pos))
        .collect()
}
