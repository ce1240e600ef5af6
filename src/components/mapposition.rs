//! World-space position of an entity.
//!
//! The position is the entity's pivot: sprites are drawn around it using
//! their origin and colliders are placed relative to it.
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Straight-line distance to a world point.
    pub fn distance_to(&self, point: Vector2) -> f32 {
        self.pos.distance_to(point)
    }
}
