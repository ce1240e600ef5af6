//! Render system.
//!
//! Draws the background grid, every sprite at its position and scale, and the
//! debug overlay when [`DebugMode`] is present.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::steering::Steering;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

const BACKGROUND_COLOR: Color = Color::new(0x11, 0x18, 0x27, 0xff);
const GRID_COLOR: Color = Color::new(0x23, 0x30, 0x43, 0xff);
const GRID_TILE: usize = 64;

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    sprites: Query<(&Sprite, &MapPosition, Option<&Scale>)>,
    debug_query: Query<(&MapPosition, Option<&BoxCollider>, Option<&Steering>)>,
    textures: Res<TextureStore>,
    screen: Res<ScreenSize>,
    debug: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND_COLOR);

    // soft grid so the floor reads as a map
    for x in (0..screen.w.max(0)).step_by(GRID_TILE) {
        d.draw_line(x, 0, x, screen.h, GRID_COLOR);
    }
    for y in (0..screen.h.max(0)).step_by(GRID_TILE) {
        d.draw_line(0, y, screen.w, y, GRID_COLOR);
    }

    for (sprite, pos, maybe_scale) in sprites.iter() {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let scale = maybe_scale.copied().unwrap_or_default();
        let size = scale.apply(Vector2 {
            x: sprite.width,
            y: sprite.height,
        });

        // Source rect selects a frame from the spritesheet
        let src = Rectangle {
            x: sprite.offset.x,
            y: sprite.offset.y,
            width: sprite.width,
            height: sprite.height,
        };
        // Destination rect places sprite so that MapPosition is the pivot (origin)
        let dest = Rectangle {
            x: pos.pos.x,
            y: pos.pos.y,
            width: size.x,
            height: size.y,
        };
        d.draw_texture_pro(tex, src, dest, scale.apply(sprite.origin), 0.0, Color::WHITE);
    }

    if debug.is_some() {
        for (position, maybe_collider, maybe_steering) in debug_query.iter() {
            if let Some(collider) = maybe_collider {
                let (x, y, w, h) = collider.get_aabb(position.pos);
                d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
            }
            let (px, py) = (position.pos.x as i32, position.pos.y as i32);
            d.draw_line(px - 5, py, px + 5, py, Color::GREEN);
            d.draw_line(px, py - 5, px, py + 5, Color::GREEN);

            if let Some(target) = maybe_steering.and_then(|s| s.target) {
                d.draw_circle_lines(target.x as i32, target.y as i32, 6.0, Color::YELLOW);
                d.draw_line(px, py, target.x as i32, target.y as i32, Color::YELLOW);
            }
        }
        d.draw_fps(10, 10);
        d.draw_text(
            "DEBUG MODE (press F11 to toggle)",
            10,
            32,
            10,
            Color::RAYWHITE,
        );
    }
}
