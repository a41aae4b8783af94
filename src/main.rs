//! Tileroam main entry point.
//!
//! A top-down 2D scene written in Rust using:
//! - **raylib** for windowing, input and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Every texture is painted from primitive shapes at startup. The player
//! walks the generated meadow with the arrow keys.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (optional) and open the raylib window
//! 2. Mount the game instance and build the scene, generating textures
//! 3. Each frame: poll input, tick the update schedule, render
//! 4. Unmount the game before the window closes
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini --seed 1234
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use std::path::PathBuf;
use tileroam::game::GameHost;
use tileroam::resources::gameconfig::GameConfig;
use tileroam::systems::input::update_input_state;
use tileroam::systems::render::render_frame;
use tileroam::textures::factory::RaylibTextureFactory;

/// Tileroam: a procedurally painted top-down 2D scene.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for world generation; overrides the configuration file.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
        config = GameConfig::with_path(&cli.config);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.window_title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let mut host = GameHost::new();
    let game = match host.mount(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to create game: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = game.start_scene(&mut RaylibTextureFactory::new(&mut rl, &thread)) {
        log::error!("Failed to start scene: {}", e);
        host.unmount();
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let Some(game) = host.game_mut() else {
            break;
        };
        let dt = rl.get_frame_time();
        update_input_state(game.world_mut(), &rl);
        game.tick(dt);
        render_frame(game.world_mut(), &mut rl, &thread);
    }

    // Textures must be released while the GL context is alive.
    host.unmount();
}
