//! Drawing surfaces painters write to.
//!
//! Painters only see [`DrawSurface`], so the same routine fills a raylib
//! [`Image`] in the game and a [`RecordingSurface`] in tests.

use raylib::prelude::{Color, Image};

/// Minimal fill API shared by every painter.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
}

/// CPU-side raylib image. Coordinates are rounded to whole pixels.
impl DrawSurface for Image {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.draw_rectangle(
            x.round() as i32,
            y.round() as i32,
            width.round() as i32,
            height.round() as i32,
            color,
        );
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.draw_circle(
            cx.round() as i32,
            cy.round() as i32,
            radius.round() as i32,
            color,
        );
    }
}

/// Shifts every draw by a fixed offset; used to paint one sheet frame with
/// frame-local coordinates.
pub struct Translated<'a> {
    pub inner: &'a mut dyn DrawSurface,
    pub dx: f32,
    pub dy: f32,
}

impl DrawSurface for Translated<'_> {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.inner
            .fill_rect(x + self.dx, y + self.dy, width, height, color);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.inner
            .fill_circle(cx + self.dx, cy + self.dy, radius, color);
    }
}

/// A single recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
}

/// Surface that records draw calls instead of touching pixels.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub width: i32,
    pub height: i32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn rects(&self) -> impl Iterator<Item = (f32, f32, f32, f32, Color)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                color,
            } => Some((x, y, width, height, color)),
            DrawOp::Circle { .. } => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle {
            cx,
            cy,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_offsets_rects_and_circles() {
        let mut rec = RecordingSurface::new(64, 32);
        {
            let mut t = Translated {
                inner: &mut rec,
                dx: 32.0,
                dy: 0.0,
            };
            t.fill_rect(1.0, 2.0, 3.0, 4.0, Color::RED);
            t.fill_circle(5.0, 6.0, 2.0, Color::BLUE);
        }
        assert_eq!(
            rec.ops,
            vec![
                DrawOp::Rect {
                    x: 33.0,
                    y: 2.0,
                    width: 3.0,
                    height: 4.0,
                    color: Color::RED,
                },
                DrawOp::Circle {
                    cx: 37.0,
                    cy: 6.0,
                    radius: 2.0,
                    color: Color::BLUE,
                },
            ]
        );
    }
}
