//! Player sprite sheet.
//!
//! The sheet is one row of 16 frames, 32x32 each: four frames per facing in
//! the order down, left, right, up. Animations index frames by position on
//! this row, see [`player_animations`](crate::resources::animationstore::player_animations).

use std::f32::consts::PI;

use raylib::prelude::Color;

use super::hex;
use super::surface::{DrawSurface, Translated};

pub const FRAME_WIDTH: i32 = 32;
pub const FRAME_HEIGHT: i32 = 32;
pub const FRAMES_PER_DIRECTION: usize = 4;
pub const FRAME_COUNT: usize = FRAMES_PER_DIRECTION * Facing::ALL.len();
pub const SHEET_WIDTH: i32 = FRAME_WIDTH * FRAME_COUNT as i32;
pub const SHEET_HEIGHT: i32 = FRAME_HEIGHT;

const BODY: Color = hex(0x3498db);
const FACE: Color = hex(0xecf0f1);
const HAIR: Color = hex(0x2c3e50);
const OUTFIT: Color = hex(0x2980b9);
const EYES: Color = hex(0x000000);
const LEGS: Color = hex(0x34495e);

/// Direction a sheet frame faces, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Down,
    Left,
    Right,
    Up,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Down, Facing::Left, Facing::Right, Facing::Up];

    /// Facing of sheet frame `frame`.
    pub fn from_frame(frame: usize) -> Facing {
        Facing::ALL[(frame / FRAMES_PER_DIRECTION) % Facing::ALL.len()]
    }

    pub fn first_frame(self) -> usize {
        self as usize * FRAMES_PER_DIRECTION
    }
}

/// Vertical arm swing in pixels for a frame within its direction.
pub fn arm_swing(frame_in_direction: usize) -> f32 {
    (frame_in_direction as f32 / 3.0 * PI).sin() * 4.0
}

/// Paint all 16 frames onto a `SHEET_WIDTH` x `SHEET_HEIGHT` surface.
pub fn paint_character_sheet(surface: &mut dyn DrawSurface) {
    for frame in 0..FRAME_COUNT {
        let mut local = Translated {
            inner: &mut *surface,
            dx: (frame as i32 * FRAME_WIDTH) as f32,
            dy: 0.0,
        };
        paint_frame(
            &mut local,
            Facing::from_frame(frame),
            frame % FRAMES_PER_DIRECTION,
        );
    }
}

/// Paint one 32x32 frame in frame-local coordinates.
pub fn paint_frame(surface: &mut dyn DrawSurface, facing: Facing, frame_in_direction: usize) {
    surface.fill_rect(8.0, 8.0, 16.0, 20.0, BODY);
    surface.fill_rect(10.0, 10.0, 12.0, 8.0, FACE);
    surface.fill_rect(8.0, 6.0, 16.0, 4.0, HAIR);

    match facing {
        Facing::Down => {
            surface.fill_rect(12.0, 12.0, 2.0, 2.0, EYES);
            surface.fill_rect(18.0, 12.0, 2.0, 2.0, EYES);
        }
        Facing::Left => surface.fill_rect(10.0, 12.0, 2.0, 2.0, EYES),
        Facing::Right => surface.fill_rect(20.0, 12.0, 2.0, 2.0, EYES),
        Facing::Up => {}
    }

    surface.fill_rect(8.0, 18.0, 16.0, 10.0, OUTFIT);

    let swing = arm_swing(frame_in_direction);
    match facing {
        Facing::Left => surface.fill_rect(4.0, 14.0 + swing, 4.0, 4.0, BODY),
        Facing::Right => surface.fill_rect(24.0, 14.0 + swing, 4.0, 4.0, BODY),
        Facing::Down | Facing::Up => {
            let lead = if facing == Facing::Down { swing } else { -swing };
            surface.fill_rect(4.0, 14.0 + lead, 4.0, 4.0, BODY);
            surface.fill_rect(24.0, 14.0 - lead, 4.0, 4.0, BODY);
        }
    }

    // legs alternate stance on odd frames
    if frame_in_direction % 2 == 0 {
        surface.fill_rect(10.0, 28.0, 4.0, 4.0, LEGS);
        surface.fill_rect(18.0, 28.0, 4.0, 4.0, LEGS);
    } else {
        surface.fill_rect(12.0, 28.0, 4.0, 4.0, LEGS);
        surface.fill_rect(16.0, 28.0, 4.0, 4.0, LEGS);
    }
}
