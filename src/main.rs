//! Bulldog walk main entry point.
//!
//! A tiny top-down RPG starter written in Rust using:
//! - **raylib** for windowing, graphics and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Tap or click anywhere to walk there. Arrow keys work too and always take
//! over from a tap. F11 toggles the debug overlay.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and open a resizable window
//! 2. Preload the sprite sheet and derive its frame geometry
//! 3. Create the scene: animations, player entity, observers and systems
//! 4. Each frame: advance [`WorldTime`], run the scene update (input,
//!    steering, animation selection, movement, bounds, rendering)
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use bulldogwalk::game::{Scene, WalkScene};
use bulldogwalk::resources::debugmode::DebugMode;
use bulldogwalk::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use bulldogwalk::resources::input::InputState;
use bulldogwalk::resources::screensize::ScreenSize;
use bulldogwalk::resources::worldtime::WorldTime;
use clap::Parser;
use std::path::PathBuf;

/// Bulldog walk: tap to walk, arrows to steer
#[derive(Parser)]
#[command(version, about = "A tiny top-down movement demo with a bulldog-headed hero.")]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,

    /// Write the effective configuration and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{} ({:?}), using defaults", e, cli.config);
    }

    // Early-exit: write config and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        if let Err(e) = config.save_to_file() {
            log::error!("{}", e);
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    log::info!("Starting bulldog walk");
    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width, window_height)
        .resizable()
        .title("Bulldog Walk");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // --------------- Scene lifecycle ---------------
    let mut scene = WalkScene::new();
    if let Err(e) = scene.preload(&mut world) {
        log::error!("{}", e);
        std::process::exit(1);
    }
    if let Err(e) = scene.create(&mut world) {
        log::error!("{}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        world.resource_mut::<WorldTime>().advance(dt);

        scene.update(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    log::info!("Bye!");
}
