//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults that reproduce the stock 800x600 scene, and loading from disk.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! title = 2D RPG Game
//! target_fps = 60
//! vsync = true
//!
//! [world]
//! width = 800
//! height = 600
//! tile_size = 32
//! path_threshold = 0.9
//! tree_count = 20
//! seed = 1234
//!
//! [player]
//! speed = 150
//!
//! [physics]
//! debug = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_WINDOW_TITLE: &str = "2D RPG Game";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_WORLD_WIDTH: u32 = 800;
const DEFAULT_WORLD_HEIGHT: u32 = 600;
const DEFAULT_TILE_SIZE: u32 = 32;
const DEFAULT_PATH_THRESHOLD: f32 = 0.9;
const DEFAULT_TREE_COUNT: u32 = 20;
const DEFAULT_PLAYER_SPEED: f32 = 150.0;
const DEFAULT_PHYSICS_DEBUG: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
/// Largest accepted window or world side, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Game configuration resource.
///
/// Stores window settings, world generation parameters and player tuning.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub window_title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// World width in world units.
    pub world_width: u32,
    /// World height in world units.
    pub world_height: u32,
    /// Grid step of the ground tiles.
    pub tile_size: u32,
    /// A tile becomes path when a uniform draw in [0,1) exceeds this.
    pub path_threshold: f32,
    /// Number of tree placement attempts.
    pub tree_count: u32,
    /// Seed for the world generator; entropy when `None`.
    pub seed: Option<u64>,
    /// Player speed in world units per second.
    pub player_speed: f32,
    /// Draw collider outlines and frame statistics.
    pub physics_debug: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            tile_size: DEFAULT_TILE_SIZE,
            path_threshold: DEFAULT_PATH_THRESHOLD,
            tree_count: DEFAULT_TREE_COUNT,
            seed: None,
            player_speed: DEFAULT_PLAYER_SPEED,
            physics_debug: DEFAULT_PHYSICS_DEBUG,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. A value that
    /// does not parse is logged and ignored.
    /// Returns an error if the file cannot be read, or if a value is out of
    /// range.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = read_u32(&config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = read_u32(&config, "window", "height") {
            self.window_height = height;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = read_u32(&config, "window", "target_fps") {
            self.target_fps = fps;
        }
        if let Some(vsync) = parsed("window", "vsync", config.getbool("window", "vsync")) {
            self.vsync = vsync;
        }

        // [world] section
        if let Some(width) = read_u32(&config, "world", "width") {
            self.world_width = width;
        }
        if let Some(height) = read_u32(&config, "world", "height") {
            self.world_height = height;
        }
        if let Some(tile_size) = read_u32(&config, "world", "tile_size") {
            self.tile_size = tile_size;
        }
        if let Some(threshold) = parsed(
            "world",
            "path_threshold",
            config.getfloat("world", "path_threshold"),
        ) {
            self.path_threshold = threshold as f32;
        }
        if let Some(count) = read_u32(&config, "world", "tree_count") {
            self.tree_count = count;
        }
        if let Some(seed) = parsed("world", "seed", config.getuint("world", "seed")) {
            self.seed = Some(seed);
        }

        // [player] section
        if let Some(speed) = parsed("player", "speed", config.getfloat("player", "speed")) {
            self.player_speed = speed as f32;
        }

        // [physics] section
        if let Some(debug) = parsed("physics", "debug", config.getbool("physics", "debug")) {
            self.physics_debug = debug;
        }

        self.validate()?;

        info!(
            "Loaded config: {}x{} window, {}x{} world, tile={}, trees={}, speed={}, fps={}, vsync={}, debug={}",
            self.window_width,
            self.window_height,
            self.world_width,
            self.world_height,
            self.tile_size,
            self.tree_count,
            self.player_speed,
            self.target_fps,
            self.vsync,
            self.physics_debug
        );

        Ok(())
    }

    /// Reject values the scene cannot be built from.
    pub fn validate(&self) -> Result<(), String> {
        if self.tile_size == 0 {
            return Err("tile_size must be greater than zero".to_string());
        }
        for (what, w, h) in [
            ("window", self.window_width, self.window_height),
            ("world", self.world_width, self.world_height),
        ] {
            if w == 0 || h == 0 || w > MAX_DIMENSION || h > MAX_DIMENSION {
                return Err(format!(
                    "{} size must be within 1..={}, got {}x{}",
                    what, MAX_DIMENSION, w, h
                ));
            }
        }
        if !self.player_speed.is_finite() || self.player_speed < 0.0 {
            return Err(format!("invalid player speed {}", self.player_speed));
        }
        Ok(())
    }
}

/// Unwrap a configparser lookup, logging values that fail to parse.
fn parsed<T>(section: &str, key: &str, value: Result<Option<T>, String>) -> Option<T> {
    match value {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring [{}] {}: {}", section, key, e);
            None
        }
    }
}

fn read_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = parsed(section, key, config.getuint(section, key))?;
    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring [{}] {}: {} is out of range", section, key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tileroam-{}-{}.ini", name, std::process::id()))
    }

    #[test]
    fn defaults_match_stock_scene() {
        let cfg = GameConfig::new();
        assert_eq!((cfg.window_width, cfg.window_height), (800, 600));
        assert_eq!((cfg.world_width, cfg.world_height), (800, 600));
        assert_eq!(cfg.tile_size, 32);
        assert_eq!(cfg.path_threshold, 0.9);
        assert_eq!(cfg.tree_count, 20);
        assert_eq!(cfg.player_speed, 150.0);
        assert_eq!(cfg.window_title, "2D RPG Game");
        assert!(cfg.seed.is_none());
        assert!(!cfg.physics_debug);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[player]\nspeed = 90\n\n[world]\nseed = 42\n").unwrap();

        let mut cfg = GameConfig::with_path(&path);
        cfg.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cfg.player_speed, 90.0);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.tile_size, 32);
        assert_eq!((cfg.window_width, cfg.window_height), (800, 600));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut cfg = GameConfig::with_path(temp_path("does-not-exist"));
        assert!(cfg.load_from_file().is_err());
    }

    #[test]
    fn zero_tile_size_is_rejected() {
        let path = temp_path("zero-tile");
        std::fs::write(&path, "[world]\ntile_size = 0\n").unwrap();
        let mut cfg = GameConfig::with_path(&path);
        let result = cfg.load_from_file();
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn unparseable_values_keep_defaults() {
        let path = temp_path("unparseable");
        std::fs::write(
            &path,
            "[window]\nwidth = wide\nheight = 480\n\n[player]\nspeed = fast\n\n[physics]\ndebug = maybe\n",
        )
        .unwrap();
        let mut cfg = GameConfig::with_path(&path);
        let result = cfg.load_from_file();
        std::fs::remove_file(&path).ok();

        assert!(result.is_ok());
        assert_eq!((cfg.window_width, cfg.window_height), (800, 480));
        assert_eq!(cfg.player_speed, 150.0);
        assert!(!cfg.physics_debug);
    }

    #[test]
    fn values_beyond_u32_are_ignored() {
        let path = temp_path("overflow");
        std::fs::write(&path, "[world]\nwidth = 5000000000\n").unwrap();
        let mut cfg = GameConfig::with_path(&path);
        let result = cfg.load_from_file();
        std::fs::remove_file(&path).ok();

        assert!(result.is_ok());
        assert_eq!(cfg.world_width, 800);
    }

    #[test]
    fn oversized_window_is_rejected() {
        let path = temp_path("oversized");
        std::fs::write(&path, "[window]\nwidth = 3000000000\n").unwrap();
        let mut cfg = GameConfig::with_path(&path);
        let result = cfg.load_from_file();
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());

        let mut cfg = GameConfig::new();
        cfg.world_height = MAX_DIMENSION + 1;
        assert!(cfg.validate().is_err());
        cfg.world_height = MAX_DIMENSION;
        assert!(cfg.validate().is_ok());
    }
}
