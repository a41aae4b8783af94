//! Camera follow.
//!
//! Moves [`Camera2DRes`] toward the entity carrying [`CameraFollow`], keeping
//! the view inside [`WorldBounds`].
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::camerafollow::CameraFollow;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::{Camera2DRes, clamp_target};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldbounds::WorldBounds;

/// Half the visible area in world units.
pub fn half_view(screen: ScreenSize, zoom: f32) -> Vector2 {
    let zoom = if zoom > 0.0 { zoom } else { 1.0 };
    Vector2 {
        x: screen.w as f32 * 0.5 / zoom,
        y: screen.h as f32 * 0.5 / zoom,
    }
}

/// Where the camera should look to show `focus`, before smoothing.
pub fn desired_target(
    focus: Vector2,
    screen: ScreenSize,
    zoom: f32,
    bounds: Option<&WorldBounds>,
) -> Vector2 {
    match bounds {
        Some(bounds) => clamp_target(focus, half_view(screen, zoom), bounds.0),
        None => focus,
    }
}

/// Ease the camera toward the followed entity.
///
/// Only the first entity with [`CameraFollow`] is tracked.
pub fn camera_follow(
    query: Query<(&MapPosition, &CameraFollow)>,
    mut camera: ResMut<Camera2DRes>,
    screen: Res<ScreenSize>,
    bounds: Option<Res<WorldBounds>>,
) {
    let Some((position, follow)) = query.iter().next() else {
        return;
    };
    let cam = camera.0;
    let goal = desired_target(position.pos, *screen, cam.zoom, bounds.as_deref());
    let mut target = Vector2 {
        x: cam.target.x + (goal.x - cam.target.x) * follow.lerp.x,
        y: cam.target.y + (goal.y - cam.target.y) * follow.lerp.y,
    };
    if follow.round_pixels {
        target.x = target.x.round();
        target.y = target.y.round();
    }
    if target.x != cam.target.x || target.y != cam.target.y {
        camera.0.target = target;
    }
}

/// Jump the camera straight to the followed entity.
pub fn snap_camera(world: &mut World) {
    let mut query = world.query::<(&MapPosition, &CameraFollow)>();
    let Some((position, follow)) = query.iter(world).next().map(|(p, f)| (p.pos, *f)) else {
        return;
    };
    let screen = *world.resource::<ScreenSize>();
    let bounds = world.get_resource::<WorldBounds>().copied();
    let Some(mut camera) = world.get_resource_mut::<Camera2DRes>() else {
        return;
    };
    let mut target = desired_target(position, screen, camera.0.zoom, bounds.as_ref());
    if follow.round_pixels {
        target.x = target.x.round();
        target.y = target.y.round();
    }
    camera.0.target = target;
}
