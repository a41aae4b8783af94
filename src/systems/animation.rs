//! Animation playback.
//!
//! [`animation`] advances every [`Animation`] by the frame delta and points
//! the entity's [`Sprite`] at the current sheet frame.
//!
//! # Animation Flow
//!
//! 1. Animation data is defined in [`AnimationStore`]
//! 2. Entities have an [`Animation`] component pointing to a key
//! 3. Controllers switch keys with [`Animation::play`]
//! 4. This system advances frames based on `fps` and points the sprite at the
//!    animation's texture and current frame

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the delta.
/// - Looks up animation data from [`AnimationStore`]; unknown keys are left alone.
/// - Mutates [`Animation`] state and the [`Sprite`] texture and source offset.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        if animation.fps > 0.0 && animation.frame_count > 0 {
            anim_comp.elapsed_time += time.delta;

            let frame_duration = 1.0 / animation.fps;
            while anim_comp.elapsed_time >= frame_duration {
                anim_comp.elapsed_time -= frame_duration;
                anim_comp.frame_index += 1;

                if anim_comp.frame_index >= animation.frame_count {
                    if animation.looped {
                        anim_comp.frame_index = 0;
                    } else {
                        // stay on last frame
                        anim_comp.frame_index = animation.frame_count - 1;
                        anim_comp.elapsed_time = 0.0;
                        break;
                    }
                }
            }
        }

        if *sprite.tex_key != *animation.tex_key {
            sprite.tex_key = animation.tex_key.to_string();
        }
        let frame_x = animation.frame_x(anim_comp.frame_index);
        if sprite.offset.x != frame_x || sprite.offset.y != 0.0 {
            sprite.offset.x = frame_x;
            sprite.offset.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::animationstore::player_animations;

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(animation);
        schedule.run(world);
    }

    fn setup(key: &str, delta: f32) -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(player_animations("player"));
        world.insert_resource(WorldTime {
            delta,
            ..Default::default()
        });
        let e = world
            .spawn((Animation::new(key), Sprite::centered("player", 32.0, 32.0)))
            .id();
        (world, e)
    }

    #[test]
    fn walk_up_starts_on_frame_twelve() {
        let (mut world, e) = setup("walk-up", 0.0);
        run(&mut world);
        assert_eq!(world.get::<Sprite>(e).unwrap().offset.x, 12.0 * 32.0);
    }

    #[test]
    fn advances_at_ten_fps_and_loops() {
        let (mut world, e) = setup("walk-left", 0.101);
        for expected in [1usize, 2, 3, 0, 1] {
            run(&mut world);
            let anim = world.get::<Animation>(e).unwrap();
            assert_eq!(anim.frame_index, expected);
            let sprite = world.get::<Sprite>(e).unwrap();
            assert_eq!(sprite.offset.x, (4 + expected) as f32 * 32.0);
        }
    }

    #[test]
    fn idle_stays_on_first_frame() {
        let (mut world, e) = setup("idle", 0.25);
        for _ in 0..5 {
            run(&mut world);
        }
        assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 0);
        assert_eq!(world.get::<Sprite>(e).unwrap().offset.x, 0.0);
    }

    #[test]
    fn sprite_switches_to_animation_texture() {
        let mut world = World::new();
        world.insert_resource(player_animations("hero"));
        world.insert_resource(WorldTime::default());
        let e = world
            .spawn((
                Animation::new("walk-right"),
                Sprite::centered("placeholder", 32.0, 32.0),
            ))
            .id();
        run(&mut world);
        let sprite = world.get::<Sprite>(e).unwrap();
        assert_eq!(sprite.tex_key, "hero");
        assert_eq!(sprite.offset.x, 8.0 * 32.0);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let (mut world, e) = setup("dance", 1.0);
        run(&mut world);
        assert_eq!(world.get::<Animation>(e).unwrap().frame_index, 0);
    }
}
