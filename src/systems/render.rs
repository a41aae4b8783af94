//! Rendering.
//!
//! Drawing happens outside the update schedule, inside raylib's drawing
//! scopes, by querying the ECS world directly:
//! - [`render_frame`] opens the frame, clears it and runs both passes.
//! - [`render_pass`] draws sprites in camera space, culled and sorted by [`ZIndex`].
//! - [`render_debug_ui`] draws screen-space statistics while [`DebugMode`] is present.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

const CLEAR_COLOR: Color = Color::BLACK;

/// Draw one complete frame.
pub fn render_frame(world: &mut World, rl: &mut RaylibHandle, thread: &RaylibThread) {
    let cam = world.resource::<Camera2DRes>().0;
    let mut d = rl.begin_drawing(thread);
    d.clear_background(CLEAR_COLOR);
    {
        let mut d2 = d.begin_mode2D(cam);
        render_pass(world, &mut d2);
    }
    render_debug_ui(world, &mut d);
}

/// We render inside raylib's drawing scopes and query the ECS World.
/// For culling we compute the world-rect visible by the camera using
/// `get_screen_to_world2D` and then do AABB intersection.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let cam = world.resource::<Camera2DRes>().0;
    let screen = *world.resource::<ScreenSize>();

    // Visible world rectangle from the screen corners.
    let tl = d2.get_screen_to_world2D(Vector2 { x: 0.0, y: 0.0 }, cam);
    let br = d2.get_screen_to_world2D(
        Vector2 {
            x: screen.w as f32,
            y: screen.h as f32,
        },
        cam,
    );
    let view_min = Vector2 {
        x: tl.x.min(br.x),
        y: tl.y.min(br.y),
    };
    let view_max = Vector2 {
        x: tl.x.max(br.x),
        y: tl.y.max(br.y),
    };

    // Collect, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
        q.iter(world)
            .filter_map(|(s, p, z)| {
                // MapPosition is the pivot; the drawn box is display_size around it
                let origin = s.display_origin();
                let min = Vector2 {
                    x: p.pos.x - origin.x,
                    y: p.pos.y - origin.y,
                };
                let max = Vector2 {
                    x: min.x + s.display_size.x,
                    y: min.y + s.display_size.y,
                };

                let overlap = !(max.x < view_min.x
                    || min.x > view_max.x
                    || max.y < view_min.y
                    || min.y > view_max.y);
                if overlap {
                    Some((s.clone(), *p, *z))
                } else {
                    None
                }
            })
            .collect()
    };

    // stable: equal layers keep spawn order
    to_draw.sort_by_key(|(_, _, z)| *z);

    let Some(textures) = world.get_resource::<TextureStore>() else {
        return;
    };

    for (sprite, pos, _z) in to_draw.iter() {
        if let Some(tex) = textures.get(&sprite.tex_key) {
            // Source rect selects a frame from the spritesheet
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: sprite.width,
                height: sprite.height,
            };
            let dest = Rectangle {
                x: pos.pos.x,
                y: pos.pos.y,
                width: sprite.display_size.x,
                height: sprite.display_size.y,
            };
            d2.draw_texture_pro(tex, src, dest, sprite.display_origin(), 0.0, Color::WHITE);
        }
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();

    let fps = d.get_fps();
    let text = format!("DEBUG | FPS: {}", fps);
    d.draw_text(&text, 10, 10, 10, Color::WHITE);

    let entity_count = world.query::<Entity>().iter(world).count();
    let text = format!("Entities: {}", entity_count);
    d.draw_text(&text, 10, 30, 10, Color::WHITE);

    let time = *world.resource::<WorldTime>();
    let text = format!("Time: {:.1}s Frame: {}", time.elapsed, time.frame_count);
    d.draw_text(&text, 10, 50, 10, Color::WHITE);

    let cam = world.resource::<Camera2DRes>().0;
    let cam_text = format!(
        "Camera target: ({:.1}, {:.1}) Zoom: {:.2}",
        cam.target.x, cam.target.y, cam.zoom
    );
    d.draw_text(&cam_text, 10, screen.h - 30, 10, Color::WHITE);
}
