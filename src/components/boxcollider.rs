use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Axis-aligned body shape, relative to the entity's [`MapPosition`](super::mapposition::MapPosition).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size whose top-left sits at the position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Create a BoxCollider centred on the position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, -height * 0.5))
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Move `position` the least amount needed to put the collider inside
    /// `bounds`. Returns the adjusted position and which axes were blocked.
    ///
    /// A collider larger than the bounds on an axis is pinned to the
    /// bounds' minimum edge on that axis.
    pub fn clamp_into(&self, position: Vector2, bounds: Rectangle) -> (Vector2, bool, bool) {
        let (min, max) = self.aabb(position);
        let mut out = position;
        let mut blocked_x = false;
        let mut blocked_y = false;

        if min.x < bounds.x {
            out.x += bounds.x - min.x;
            blocked_x = true;
        } else if max.x > bounds.x + bounds.width {
            out.x -= max.x - (bounds.x + bounds.width);
            blocked_x = true;
        }
        if min.y < bounds.y {
            out.y += bounds.y - min.y;
            blocked_y = true;
        } else if max.y > bounds.y + bounds.height {
            out.y -= max.y - (bounds.y + bounds.height);
            blocked_y = true;
        }
        (out, blocked_x, blocked_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn centered_collider_surrounds_position() {
        let collider = BoxCollider::centered(32.0, 32.0);
        let (x, y, w, h) = collider.get_aabb(Vector2::new(400.0, 300.0));
        assert_eq!((x, y, w, h), (384.0, 284.0, 32.0, 32.0));
    }

    #[test]
    fn clamp_inside_bounds_is_noop() {
        let collider = BoxCollider::centered(32.0, 32.0);
        let (pos, bx, by) = collider.clamp_into(Vector2::new(400.0, 300.0), world());
        assert_eq!((pos.x, pos.y), (400.0, 300.0));
        assert!(!bx && !by);
    }

    #[test]
    fn clamp_pushes_back_from_each_edge() {
        let collider = BoxCollider::centered(32.0, 32.0);

        let (pos, bx, by) = collider.clamp_into(Vector2::new(-10.0, 300.0), world());
        assert_eq!(pos.x, 16.0);
        assert!(bx && !by);

        let (pos, bx, _) = collider.clamp_into(Vector2::new(900.0, 300.0), world());
        assert_eq!(pos.x, 784.0);
        assert!(bx);

        let (pos, _, by) = collider.clamp_into(Vector2::new(400.0, 5.0), world());
        assert_eq!(pos.y, 16.0);
        assert!(by);

        let (pos, _, by) = collider.clamp_into(Vector2::new(400.0, 599.0), world());
        assert_eq!(pos.y, 584.0);
        assert!(by);
    }
}
