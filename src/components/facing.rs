//! Discrete facing direction of a character.
//!
//! The four directions map one-to-one onto the rows of a walk-cycle sprite
//! sheet (down, left, right, up). The same enum doubles as the direction of a
//! held arrow key.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use std::fmt;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    #[default]
    Down,
    Left,
    Right,
    Up,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Down, Facing::Left, Facing::Right, Facing::Up];

    /// Sprite sheet row holding this direction's frames.
    pub fn row(self) -> usize {
        match self {
            Facing::Down => 0,
            Facing::Left => 1,
            Facing::Right => 2,
            Facing::Up => 3,
        }
    }

    /// Unit vector in screen space (y grows downward).
    pub fn unit_vector(self) -> Vector2 {
        match self {
            Facing::Down => Vector2 { x: 0.0, y: 1.0 },
            Facing::Left => Vector2 { x: -1.0, y: 0.0 },
            Facing::Right => Vector2 { x: 1.0, y: 0.0 },
            Facing::Up => Vector2 { x: 0.0, y: -1.0 },
        }
    }

    /// Dominant direction of a velocity.
    ///
    /// The horizontal axis wins only when `|vx| > |vy|`; otherwise the vertical
    /// axis decides. Returns `None` for a zero vector.
    pub fn from_velocity(velocity: Vector2) -> Option<Facing> {
        let (vx, vy) = (velocity.x, velocity.y);
        if vx.abs() > vy.abs() {
            if vx > 0.0 {
                Some(Facing::Right)
            } else {
                Some(Facing::Left)
            }
        } else if vy > 0.0 {
            Some(Facing::Down)
        } else if vy < 0.0 {
            Some(Facing::Up)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
            Facing::Up => "up",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
