//! Scene lifecycle and the walking demo scene.
//!
//! The host loop drives a [`Scene`] through three synchronous calls:
//! [`Scene::preload`] once to load assets, [`Scene::create`] once to build the
//! world, then [`Scene::update`] every rendered frame.
//!
//! [`WalkScene`] is the only scene: a bulldog-headed hero on a grid that walks
//! to wherever the player taps or clicks, or along the arrow keys.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use log::info;
use raylib::prelude::Vector2;

use crate::components::animation::{Animation, WalkCycle};
use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::steering::Steering;
use crate::events::pointer::pointer_down_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritesheet::{SpriteSheet, SpriteSheetStore};
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation, facing_animation_selector};
use crate::systems::bounds::world_bounds_system;
use crate::systems::input::update_input_state;
use crate::systems::movement::movement;
use crate::systems::render::render_system;
use crate::systems::steering::steering_controller;
use crate::systems::viewport::update_screen_size;

/// Texture key of the player's sprite sheet.
pub const PLAYER_TEX_KEY: &str = "bulldog";
/// Prefix of the player's walk tracks (`walk-down`, `walk-left`, ...).
pub const WALK_PREFIX: &str = "walk";

/// A game scene driven by the host loop.
///
/// Every call completes within the frame it is made in.
pub trait Scene {
    /// Load assets. Runs once, before [`Scene::create`].
    fn preload(&mut self, world: &mut World) -> Result<(), String>;
    /// Spawn entities and build per-frame systems. Runs once.
    fn create(&mut self, world: &mut World) -> Result<(), String>;
    /// Advance one frame.
    fn update(&mut self, world: &mut World);
}

/// The walking demo scene.
pub struct WalkScene {
    schedule: Schedule,
    platform: bool,
    player: Option<Entity>,
}

impl Default for WalkScene {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkScene {
    /// Scene that polls raylib input, tracks the window and renders.
    pub fn new() -> Self {
        Self {
            schedule: Schedule::default(),
            platform: true,
            player: None,
        }
    }

    /// Scene without window-bound systems, for driving the simulation from
    /// code. Input is fed through [`InputState`] and
    /// [`PointerDownEvent`](crate::events::pointer::PointerDownEvent).
    pub fn headless() -> Self {
        Self {
            platform: false,
            ..Self::new()
        }
    }

    /// The player entity, once [`Scene::create`] has run.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    fn build_schedule(&mut self) {
        self.schedule.add_systems(
            (
                steering_controller,
                facing_animation_selector,
                movement,
                world_bounds_system,
                animation,
            )
                .chain(),
        );
        if self.platform {
            self.schedule.add_systems(
                (update_screen_size, update_input_state)
                    .chain()
                    .before(steering_controller),
            );
            self.schedule.add_systems(render_system.after(animation));
        }
    }
}

/// Derive the sheet geometry for an image of the given size using the
/// configured grid and rounding policy.
pub fn sheet_from_config(
    config: &GameConfig,
    image_width: u32,
    image_height: u32,
) -> SpriteSheet {
    let sheet = SpriteSheet::from_image_size(
        image_width,
        image_height,
        config.sheet_columns,
        config.sheet_rows,
        config.frame_rounding,
    );
    info!(
        "Sprite sheet {}x{} split into {}x{} frames of {}x{} ({:?})",
        image_width,
        image_height,
        sheet.columns,
        sheet.rows,
        sheet.frame_width,
        sheet.frame_height,
        config.frame_rounding
    );
    sheet
}

/// Load the player texture and record its frame geometry.
fn load_player_sheet(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    config: Res<GameConfig>,
    mut textures: ResMut<TextureStore>,
    mut sheets: ResMut<SpriteSheetStore>,
) -> Result<(), String> {
    let path = config.sheet_path.to_str().ok_or_else(|| {
        format!(
            "Sprite sheet path {:?} is not valid UTF-8",
            config.sheet_path
        )
    })?;
    let texture = rl
        .load_texture(&th, path)
        .map_err(|e| format!("Failed to load sprite sheet {}: {}", path, e))?;

    let size = |v: i32| {
        u32::try_from(v).map_err(|_| format!("Sprite sheet {} has an invalid size", path))
    };
    let sheet = sheet_from_config(&config, size(texture.width)?, size(texture.height)?);
    sheets.insert(PLAYER_TEX_KEY, sheet);
    textures.insert(PLAYER_TEX_KEY, texture);
    Ok(())
}

impl Scene for WalkScene {
    fn preload(&mut self, world: &mut World) -> Result<(), String> {
        if !world.contains_resource::<GameConfig>() {
            world.insert_resource(GameConfig::new());
        }
        world.init_resource::<TextureStore>();
        world.init_resource::<SpriteSheetStore>();
        world
            .run_system_once(load_player_sheet)
            .map_err(|e| format!("Failed to run preload: {}", e))?
    }

    fn create(&mut self, world: &mut World) -> Result<(), String> {
        let config = world
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        let screen = match world.get_resource::<ScreenSize>() {
            Some(screen) => *screen,
            None => {
                let (w, h) = config.window_size();
                let screen = ScreenSize { w, h };
                world.insert_resource(screen);
                screen
            }
        };
        world.init_resource::<WorldTime>();
        world.init_resource::<InputState>();
        world.init_resource::<AnimationStore>();
        world.init_resource::<SpriteSheetStore>();

        let sheet = world
            .resource::<SpriteSheetStore>()
            .get(PLAYER_TEX_KEY)
            .copied()
            .ok_or_else(|| format!("Sprite sheet '{}' was not preloaded", PLAYER_TEX_KEY))?;

        // one looping walk track per facing, one sheet row each
        let cycle = WalkCycle::new(WALK_PREFIX, sheet.columns as usize, config.idle_column);
        {
            let mut store = world.resource_mut::<AnimationStore>();
            for facing in Facing::ALL {
                store.insert(
                    cycle.track_key(facing),
                    AnimationResource {
                        tex_key: Arc::from(PLAYER_TEX_KEY),
                        frames: sheet.row_frames(facing.row() as u32),
                        fps: config.frame_rate,
                        looped: true,
                    },
                );
            }
        }

        let frame_w = sheet.frame_width as f32;
        let frame_h = sheet.frame_height as f32;
        let scale = Scale(config.player_scale);
        let collider_size = scale.apply(Vector2 {
            x: frame_w,
            y: frame_h,
        });
        let mut sprite = Sprite::centered(PLAYER_TEX_KEY, frame_w, frame_h);
        sprite.offset = sheet.frame_offset(cycle.idle_frame(Facing::Down));
        let center = screen.center();

        let player = world
            .spawn((
                MapPosition::new(center.x, center.y),
                RigidBody::new(),
                Steering::new(config.player_speed, config.arrival_distance),
                Facing::Down,
                Animation::new(cycle.track_key(Facing::Down)),
                cycle,
                sprite,
                scale,
                BoxCollider::centered(collider_size.x, collider_size.y),
            ))
            .id();
        self.player = Some(player);
        info!(
            "Player spawned at ({:.0}, {:.0}) in a {}x{} viewport",
            center.x, center.y, screen.w, screen.h
        );

        world.spawn(Observer::new(pointer_down_observer));
        world.spawn(Observer::new(switch_debug_observer));
        world.flush();

        self.build_schedule();
        self.schedule
            .initialize(world)
            .map_err(|e| format!("Failed to initialize schedule: {}", e))?;
        Ok(())
    }

    fn update(&mut self, world: &mut World) {
        self.schedule.run(world);
    }
}
