//! Game instance and scene setup.
//!
//! - [`Game`] is one engine instance: an ECS [`World`] plus the update
//!   [`Schedule`]. It builds the scene and advances it one tick at a time.
//! - [`GameHost`] owns at most one live [`Game`] and controls its lifecycle
//!   through [`GameHost::mount`] and [`GameHost::unmount`].
//!
//! Raylib is kept out of the world. Textures are produced through a
//! [`TextureFactory`], so the same scene setup runs headless in tests.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::camerafollow::CameraFollow;
use crate::components::group::Group;
use crate::components::inputcontrolled::{InputControlled, WalkState};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::layout::{plan_tiles, plan_trees};
use crate::resources::animationstore::{AnimationStore, player_animations};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureCache;
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldrng::WorldRng;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::camera::{camera_follow, snap_camera};
use crate::systems::inputsimplecontroller::input_simple_controller;
use crate::systems::movement::movement;
use crate::systems::time::update_world_time;
use crate::textures::character::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::textures::factory::{PLAYER_TEXTURE, TREE_TEXTURE, TextureFactory, register_world_textures};
use crate::textures::terrain::{TILE_TEXTURE_SIZE, TREE_DISPLAY_SIZE, TREE_TEXTURE_SIZE};

pub const TILES_GROUP: &str = "tiles";
pub const TREES_GROUP: &str = "trees";
pub const PLAYER_GROUP: &str = "player";

/// Per-frame camera smoothing toward the player.
const CAMERA_LERP: f32 = 0.1;

/// One engine instance.
pub struct Game {
    world: World,
    update: Schedule,
}

impl Game {
    /// Build the world resources and the update schedule from `config`.
    ///
    /// The scene is empty until [`Game::start_scene`] runs.
    pub fn new(config: GameConfig) -> Result<Self, String> {
        config.validate()?;

        let mut world = World::new();
        let screen = ScreenSize {
            w: config.window_width as i32,
            h: config.window_height as i32,
        };
        world.insert_resource(WorldTime::default());
        world.insert_resource(InputState::default());
        world.insert_resource(screen);
        world.insert_resource(WorldBounds::new(
            config.world_width as f32,
            config.world_height as f32,
        ));
        world.insert_resource(WorldRng::from_seed(config.seed));
        world.insert_resource(Camera2DRes::centered(screen.center(), screen.center()));
        world.insert_resource(AnimationStore::default());
        if config.physics_debug {
            world.insert_resource(DebugMode);
        }
        world.insert_resource(config);

        let mut update = Schedule::default();
        update.add_systems(
            (input_simple_controller, movement, animation, camera_follow).chain(),
        );
        update
            .initialize(&mut world)
            .map_err(|e| format!("Failed to initialize schedule: {}", e))?;

        Ok(Self { world, update })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Generate missing textures, then (re)build the scene.
    ///
    /// Textures already in the cache are reused. Scene entities from a
    /// previous start are despawned first.
    pub fn start_scene<F: TextureFactory>(&mut self, factory: &mut F) -> Result<(), String> {
        if !self.world.contains_resource::<TextureCache<F::Texture>>() {
            self.world.insert_resource(TextureCache::<F::Texture>::new());
        }
        self.world
            .resource_scope(|world, mut cache: Mut<TextureCache<F::Texture>>| {
                let mut rng = world.resource_mut::<WorldRng>();
                register_world_textures::<F>(&mut cache, factory, &mut rng.0)
            })?;

        self.world.insert_resource(player_animations(PLAYER_TEXTURE));

        clean_scene(&mut self.world);
        let config = self.world.resource::<GameConfig>().clone();
        spawn_ground(&mut self.world, &config);
        spawn_trees(&mut self.world, &config);
        spawn_player(&mut self.world, &config);
        snap_camera(&mut self.world);
        self.world.flush();

        info!(
            "Scene started: {} entities",
            self.world.query::<&Group>().iter(&self.world).count()
        );
        Ok(())
    }

    /// Tear the scene down and build it again. The texture cache is kept.
    pub fn restart_scene<F: TextureFactory>(&mut self, factory: &mut F) -> Result<(), String> {
        self.start_scene(factory)
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.update.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// The entity controlled by the arrow keys, if the scene is running.
    pub fn player(&mut self) -> Option<Entity> {
        self.world
            .query_filtered::<Entity, With<InputControlled>>()
            .iter(&self.world)
            .next()
    }
}

/// Despawn every scene entity.
pub fn clean_scene(world: &mut World) {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<Group>>()
        .iter(world)
        .collect();
    for entity in entities {
        world.despawn(entity);
    }
}

fn spawn_ground(world: &mut World, config: &GameConfig) {
    let tiles = {
        let mut rng = world.resource_mut::<WorldRng>();
        plan_tiles(
            &mut rng.0,
            config.world_width,
            config.world_height,
            config.tile_size,
            config.path_threshold,
        )
    };
    let tile_size = config.tile_size as f32;
    let tile_tex = TILE_TEXTURE_SIZE as f32;
    world.spawn_batch(tiles.into_iter().map(move |tile| {
        (
            Group(TILES_GROUP),
            MapPosition::new(tile.center.x, tile.center.y),
            ZIndex::TILES,
            Sprite::centered(tile.kind.texture(), tile_tex, tile_tex)
                .with_display_size(tile_size, tile_size),
        )
    }));
}

fn spawn_trees(world: &mut World, config: &GameConfig) {
    let trees = {
        let mut rng = world.resource_mut::<WorldRng>();
        plan_trees(&mut rng.0, config.tree_count)
    };
    let tree_tex = TREE_TEXTURE_SIZE as f32;
    world.spawn_batch(trees.into_iter().map(move |pos| {
        (
            Group(TREES_GROUP),
            MapPosition::new(pos.x, pos.y),
            ZIndex::DECORATIONS,
            Sprite::centered(TREE_TEXTURE, tree_tex, tree_tex)
                .with_display_size(TREE_DISPLAY_SIZE, TREE_DISPLAY_SIZE),
        )
    }));
}

fn spawn_player(world: &mut World, config: &GameConfig) {
    let start = Vector2 {
        x: config.world_width as f32 * 0.5,
        y: config.world_height as f32 * 0.5,
    };
    let (w, h) = (FRAME_WIDTH as f32, FRAME_HEIGHT as f32);
    world.spawn((
        (
            Group(PLAYER_GROUP),
            MapPosition::new(start.x, start.y),
            ZIndex::ACTORS,
            Sprite::centered(PLAYER_TEXTURE, w, h),
            RigidBody::new().with_world_bounds(),
            BoxCollider::centered(w, h),
        ),
        (
            Animation::new(WalkState::Idle.animation_key()),
            InputControlled::new(config.player_speed),
            WalkState::Idle,
            CameraFollow::new(CAMERA_LERP, CAMERA_LERP),
        ),
    ));
}

/// Owner of at most one live [`Game`].
#[derive(Default)]
pub struct GameHost {
    instance: Option<Game>,
}

impl GameHost {
    pub fn new() -> Self {
        Self { instance: None }
    }

    /// Create the game instance, or return the live one unchanged.
    ///
    /// When an instance is already mounted `config` is ignored.
    pub fn mount(&mut self, config: GameConfig) -> Result<&mut Game, String> {
        let game = match self.instance.take() {
            Some(game) => {
                warn!("Game already mounted; keeping the live instance");
                game
            }
            None => {
                let game = Game::new(config)?;
                info!("Game mounted");
                game
            }
        };
        Ok(self.instance.insert(game))
    }

    /// Destroy the live instance, dropping every entity and resource.
    ///
    /// Returns false when nothing was mounted.
    pub fn unmount(&mut self) -> bool {
        match self.instance.take() {
            Some(mut game) => {
                game.world.clear_all();
                info!("Game unmounted");
                true
            }
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.instance.is_some()
    }

    pub fn game(&self) -> Option<&Game> {
        self.instance.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.instance.as_mut()
    }
}

impl Drop for GameHost {
    fn drop(&mut self) {
        self.unmount();
    }
}
