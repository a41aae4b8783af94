use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, the size of the source frame and an
/// offset if the texture is a spritesheet.
/// The offset selects the frame from the spritesheet.
/// The origin is the pivot point (in source pixels) relative to the frame's
/// top-left used for placement when rendering.
/// `display_size` is the on-screen size; the frame is stretched to fit it.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub display_size: Vector2,
}

impl Sprite {
    /// A sprite showing a `width` x `height` frame at its natural size,
    /// pivoted on its centre.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            display_size: Vector2 {
                x: width,
                y: height,
            },
        }
    }

    pub fn with_display_size(mut self, width: f32, height: f32) -> Self {
        self.display_size = Vector2 {
            x: width,
            y: height,
        };
        self
    }

    /// Pivot expressed in display pixels.
    pub fn display_origin(&self) -> Vector2 {
        Vector2 {
            x: self.origin.x * self.display_size.x / self.width,
            y: self.origin.y * self.display_size.y / self.height,
        }
    }
}
