use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its frame size in pixels and an offset into the
/// spritesheet. The offset selects the visible frame.
/// The origin is the pivot point (in unscaled pixels) relative to the frame's top-left
/// used for placement when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
}

impl Sprite {
    /// Sprite of the given frame size with its pivot at the frame center.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
        }
    }
}
