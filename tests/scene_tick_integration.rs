//! Scene tick integration tests for the controller, movement, animation and
//! camera systems, each driven through a single-system schedule.

use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, Vector2};

use tileroam::components::animation::Animation;
use tileroam::components::boxcollider::BoxCollider;
use tileroam::components::camerafollow::CameraFollow;
use tileroam::components::inputcontrolled::{InputControlled, WalkState};
use tileroam::components::mapposition::MapPosition;
use tileroam::components::rigidbody::RigidBody;
use tileroam::components::sprite::Sprite;
use tileroam::resources::animationstore::player_animations;
use tileroam::resources::camera2d::Camera2DRes;
use tileroam::resources::input::InputState;
use tileroam::resources::screensize::ScreenSize;
use tileroam::resources::worldbounds::WorldBounds;
use tileroam::resources::worldtime::WorldTime;
use tileroam::systems::animation::animation;
use tileroam::systems::camera::camera_follow;
use tileroam::systems::inputsimplecontroller::input_simple_controller;
use tileroam::systems::movement::movement;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(WorldBounds::new(800.0, 600.0));
    world.insert_resource(InputState::default());
    world.insert_resource(player_animations("player"));
    world.insert_resource(Camera2DRes::centered(
        Vector2 { x: 400.0, y: 300.0 },
        Vector2 { x: 400.0, y: 300.0 },
    ));
    world
}

fn hold(world: &mut World, keys: &[KeyboardKey]) {
    world
        .resource_mut::<InputState>()
        .sample(|k| keys.contains(&k));
}

fn tick_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(input_simple_controller);
    schedule.run(world);
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_scene(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((input_simple_controller, movement, animation, camera_follow).chain());
    schedule.run(world);
}

fn spawn_walker(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(x, y),
            RigidBody::new().with_world_bounds(),
            BoxCollider::centered(32.0, 32.0),
            Sprite::centered("player", 32.0, 32.0),
            Animation::new("idle"),
            InputControlled::new(150.0),
            WalkState::Idle,
        ))
        .id()
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn movement_integrates_velocity() {
    let mut world = make_world(0.5);
    let e = world
        .spawn((
            MapPosition::new(100.0, 100.0),
            RigidBody {
                velocity: Vector2 { x: 10.0, y: -20.0 },
                collide_world_bounds: false,
            },
        ))
        .id();

    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(e).unwrap().pos;
    assert!(approx_eq(pos.x, 105.0));
    assert!(approx_eq(pos.y, 90.0));
}

#[test]
fn movement_without_bounds_flag_leaves_world() {
    let mut world = make_world(1.0);
    let e = world
        .spawn((
            MapPosition::new(10.0, 10.0),
            RigidBody {
                velocity: Vector2 { x: -100.0, y: 0.0 },
                collide_world_bounds: false,
            },
            BoxCollider::centered(32.0, 32.0),
        ))
        .id();

    tick_movement(&mut world);

    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().pos.x, -90.0));
}

#[test]
fn movement_clamps_to_world_and_zeroes_blocked_axis() {
    let mut world = make_world(1.0);
    let e = world
        .spawn((
            MapPosition::new(30.0, 300.0),
            RigidBody {
                velocity: Vector2 { x: -150.0, y: 40.0 },
                collide_world_bounds: true,
            },
            BoxCollider::centered(32.0, 32.0),
        ))
        .id();

    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(e).unwrap().pos;
    let vel = world.get::<RigidBody>(e).unwrap().velocity;
    assert!(approx_eq(pos.x, 16.0));
    assert!(approx_eq(pos.y, 340.0));
    assert_eq!(vel.x, 0.0);
    assert_eq!(vel.y, 40.0);
}

// ============================================================================
// Controller
// ============================================================================

#[test]
fn controller_sets_velocity_state_and_animation() {
    let mut world = make_world(1.0 / 60.0);
    let e = spawn_walker(&mut world, 400.0, 300.0);

    let cases: [(&[KeyboardKey], (f32, f32), WalkState); 5] = [
        (&[], (0.0, 0.0), WalkState::Idle),
        (&[KeyboardKey::KEY_LEFT], (-150.0, 0.0), WalkState::WalkLeft),
        (&[KeyboardKey::KEY_RIGHT], (150.0, 0.0), WalkState::WalkRight),
        (
            &[KeyboardKey::KEY_LEFT, KeyboardKey::KEY_UP],
            (-150.0, -150.0),
            WalkState::WalkLeft,
        ),
        (&[KeyboardKey::KEY_DOWN], (0.0, 150.0), WalkState::WalkDown),
    ];

    for (keys, (vx, vy), state) in cases {
        hold(&mut world, keys);
        tick_controller(&mut world);

        let vel = world.get::<RigidBody>(e).unwrap().velocity;
        assert_eq!((vel.x, vel.y), (vx, vy), "keys {keys:?}");
        assert_eq!(*world.get::<WalkState>(e).unwrap(), state);
        assert_eq!(
            world.get::<Animation>(e).unwrap().animation_key,
            state.animation_key()
        );
    }
}

#[test]
fn holding_same_direction_does_not_restart_animation() {
    let mut world = make_world(0.101);
    let e = spawn_walker(&mut world, 400.0, 300.0);

    hold(&mut world, &[KeyboardKey::KEY_RIGHT]);
    tick_scene(&mut world);
    tick_scene(&mut world);

    let anim = world.get::<Animation>(e).unwrap();
    assert_eq!(anim.animation_key, "walk-right");
    assert_eq!(anim.frame_index, 2);
    assert_eq!(world.get::<Sprite>(e).unwrap().offset.x, 10.0 * 32.0);
}

#[test]
fn releasing_keys_returns_to_idle_frame() {
    let mut world = make_world(0.101);
    let e = spawn_walker(&mut world, 400.0, 300.0);

    hold(&mut world, &[KeyboardKey::KEY_UP]);
    tick_scene(&mut world);
    hold(&mut world, &[]);
    tick_scene(&mut world);

    let anim = world.get::<Animation>(e).unwrap();
    assert_eq!(anim.animation_key, "idle");
    assert_eq!(anim.frame_index, 0);
    assert_eq!(world.get::<Sprite>(e).unwrap().offset.x, 0.0);
    let vel = world.get::<RigidBody>(e).unwrap().velocity;
    assert_eq!((vel.x, vel.y), (0.0, 0.0));
}

#[test]
fn walking_into_corner_stops_at_bounds() {
    let mut world = make_world(0.25);
    let e = spawn_walker(&mut world, 40.0, 40.0);

    hold(&mut world, &[KeyboardKey::KEY_LEFT, KeyboardKey::KEY_UP]);
    for _ in 0..4 {
        tick_scene(&mut world);
    }

    let pos = world.get::<MapPosition>(e).unwrap().pos;
    assert!(approx_eq(pos.x, 16.0));
    assert!(approx_eq(pos.y, 16.0));
    // still walking left even while blocked
    assert_eq!(*world.get::<WalkState>(e).unwrap(), WalkState::WalkLeft);
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn camera_follows_player_inside_larger_world() {
    let mut world = make_world(1.0);
    world.insert_resource(WorldBounds::new(3200.0, 3200.0));
    world.insert_resource(Camera2DRes::centered(
        Vector2 { x: 400.0, y: 300.0 },
        Vector2 { x: 1000.0, y: 1000.0 },
    ));
    let e = spawn_walker(&mut world, 1000.0, 1000.0);
    world.entity_mut(e).insert(CameraFollow::new(0.1, 0.1));

    hold(&mut world, &[KeyboardKey::KEY_RIGHT]);
    tick_scene(&mut world);

    // player moved 150 to the right; camera covers a tenth of the gap
    let pos = world.get::<MapPosition>(e).unwrap().pos;
    assert!(approx_eq(pos.x, 1150.0));
    let target = world.resource::<Camera2DRes>().0.target;
    assert_eq!((target.x, target.y), (1015.0, 1000.0));
}
