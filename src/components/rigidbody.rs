//! Kinematic body component.
//!
//! The [`RigidBody`] component is the entity's physics body: controllers write
//! its velocity and the movement system integrates it into
//! [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing the current velocity.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new();
/// rb.set_velocity(Vector2 { x: 200.0, y: 0.0 });
/// assert!(rb.is_moving());
/// rb.stop();
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Zero the velocity.
    pub fn stop(&mut self) {
        self.velocity = Vector2 { x: 0.0, y: 0.0 };
    }

    /// True when any velocity component is non-zero.
    pub fn is_moving(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }
}
