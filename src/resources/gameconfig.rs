//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! vsync = true
//!
//! [player]
//! speed = 200
//! arrival_distance = 8
//! scale = 0.5
//!
//! [spritesheet]
//! path = ./assets/textures/animated_dog_character_walk.png
//! columns = 3
//! rows = 4
//! rounding = floor
//! idle_column = 0
//! frame_rate = 10
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::animation::IdleColumn;
use crate::components::steering::{DEFAULT_ARRIVAL_DISTANCE, DEFAULT_SPEED};
use crate::resources::spritesheet::FrameRounding;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_PLAYER_SCALE: f32 = 0.5;
const DEFAULT_SHEET_PATH: &str = "./assets/textures/animated_dog_character_walk.png";
const DEFAULT_SHEET_COLUMNS: u32 = 3;
const DEFAULT_SHEET_ROWS: u32 = 4;
const DEFAULT_FRAME_RATE: f32 = 10.0;
/// raylib takes window sizes as `i32`.
const MAX_WINDOW_DIMENSION: u32 = i32::MAX as u32;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, player tuning and the sprite sheet layout,
/// including the idle-column and frame-rounding policies.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Walking speed in world units per second.
    pub player_speed: f32,
    /// Distance under which a tapped target counts as reached.
    pub arrival_distance: f32,
    /// Draw scale of the player sprite.
    pub player_scale: f32,
    /// Sprite sheet image path.
    pub sheet_path: PathBuf,
    /// Sprite sheet columns (walk cycle length).
    pub sheet_columns: u32,
    /// Sprite sheet rows (one per facing).
    pub sheet_rows: u32,
    pub frame_rounding: FrameRounding,
    pub idle_column: IdleColumn,
    /// Walk animation frames per second.
    pub frame_rate: f32,
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
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            player_speed: DEFAULT_SPEED,
            arrival_distance: DEFAULT_ARRIVAL_DISTANCE,
            player_scale: DEFAULT_PLAYER_SCALE,
            sheet_path: PathBuf::from(DEFAULT_SHEET_PATH),
            sheet_columns: DEFAULT_SHEET_COLUMNS,
            sheet_rows: DEFAULT_SHEET_ROWS,
            frame_rounding: FrameRounding::default(),
            idle_column: IdleColumn::default(),
            frame_rate: DEFAULT_FRAME_RATE,
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
    /// Missing values retain their current (default) values. Values that do
    /// not parse are logged and ignored.
    /// Returns an error if the file cannot be read.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, speed={}, sheet={:?} ({}x{}, {:?}, idle column {})",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.player_speed,
            self.sheet_path,
            self.sheet_columns,
            self.sheet_rows,
            self.frame_rounding,
            self.idle_column.index()
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = read_uint(config, "window", "width", MAX_WINDOW_DIMENSION) {
            self.window_width = width;
        }
        if let Some(height) = read_uint(config, "window", "height", MAX_WINDOW_DIMENSION) {
            self.window_height = height;
        }
        if let Some(fps) = read_uint(config, "window", "target_fps", u32::MAX) {
            self.target_fps = fps;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }
        if let Some(distance) = config.getfloat("player", "arrival_distance").ok().flatten() {
            self.arrival_distance = distance as f32;
        }
        if let Some(scale) = config.getfloat("player", "scale").ok().flatten() {
            self.player_scale = scale as f32;
        }

        // [spritesheet] section
        if let Some(path) = config.get("spritesheet", "path") {
            self.sheet_path = PathBuf::from(path);
        }
        if let Some(columns) = read_uint(config, "spritesheet", "columns", u32::MAX) {
            self.sheet_columns = columns;
        }
        if let Some(rows) = read_uint(config, "spritesheet", "rows", u32::MAX) {
            self.sheet_rows = rows;
        }
        if let Some(rounding) = config.get("spritesheet", "rounding") {
            match FrameRounding::parse(&rounding) {
                Some(r) => self.frame_rounding = r,
                None => warn!(
                    "Unknown spritesheet rounding '{}', keeping {:?}",
                    rounding, self.frame_rounding
                ),
            }
        }
        if let Some(column) = config.getuint("spritesheet", "idle_column").ok().flatten() {
            match IdleColumn::from_index(column) {
                Some(c) => self.idle_column = c,
                None => warn!("idle_column must be 0 or 1, got {}", column),
            }
        }
        if let Some(rate) = config.getfloat("spritesheet", "frame_rate").ok().flatten() {
            self.frame_rate = rate as f32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [player] section
        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set(
            "player",
            "arrival_distance",
            Some(self.arrival_distance.to_string()),
        );
        config.set("player", "scale", Some(self.player_scale.to_string()));

        // [spritesheet] section
        config.set(
            "spritesheet",
            "path",
            Some(self.sheet_path.display().to_string()),
        );
        config.set("spritesheet", "columns", Some(self.sheet_columns.to_string()));
        config.set("spritesheet", "rows", Some(self.sheet_rows.to_string()));
        let rounding = match self.frame_rounding {
            FrameRounding::Floor => "floor",
            FrameRounding::Round => "round",
        };
        config.set("spritesheet", "rounding", Some(rounding.to_string()));
        config.set(
            "spritesheet",
            "idle_column",
            Some(self.idle_column.index().to_string()),
        );
        config.set("spritesheet", "frame_rate", Some(self.frame_rate.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size in raylib's signed pixel units.
    ///
    /// Dimensions beyond `i32::MAX` saturate.
    pub fn window_size(&self) -> (i32, i32) {
        (
            i32::try_from(self.window_width).unwrap_or(i32::MAX),
            i32::try_from(self.window_height).unwrap_or(i32::MAX),
        )
    }
}

/// Read an unsigned key that must fit in `max`.
///
/// Out-of-range values are logged and ignored like any other invalid value.
fn read_uint(config: &Ini, section: &str, key: &str, max: u32) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(v) if v <= max => Some(v),
        _ => {
            warn!(
                "[{}] {} = {} is out of range (max {}), ignoring",
                section, key, value, max
            );
            None
        }
    }
}
