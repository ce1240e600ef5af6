use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned box used to keep an entity inside the world bounds.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size, top-left at the entity position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Create a BoxCollider of given size centered on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, -height * 0.5))
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_aabb() {
        let c = BoxCollider::centered(128.0, 64.0);
        let (min, max) = c.aabb(Vector2::new(100.0, 100.0));
        assert_eq!(min, Vector2::new(36.0, 68.0));
        assert_eq!(max, Vector2::new(164.0, 132.0));
    }

    #[test]
    fn test_negative_size_normalized() {
        let c = BoxCollider::new(-10.0, -10.0);
        let (x, y, w, h) = c.get_aabb(Vector2::new(0.0, 0.0));
        assert_eq!((x, y, w, h), (-10.0, -10.0, 10.0, 10.0));
    }
}
