use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Uniform draw scale of a sprite. Colliders sized from the sprite use it too.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Scale(pub f32);

impl Scale {
    /// Scale a size or pivot given in frame pixels.
    pub fn apply(&self, v: Vector2) -> Vector2 {
        v.scale_by(self.0)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale(1.0)
    }
}
