//! Input-driven steering component.
//!
//! [`Steering`] describes how an entity responds to player input: held arrow
//! keys move it along one axis, and a pointer-down stores a target point it
//! walks toward until it arrives.
//!
//! The system in [`crate::systems::steering`] reads this component together
//! with [`crate::resources::input::InputState`] to update the entity's
//! [`RigidBody`](super::rigidbody::RigidBody) velocity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Default walking speed in world units per second.
pub const DEFAULT_SPEED: f32 = 200.0;
/// Default distance under which a target point counts as reached.
pub const DEFAULT_ARRIVAL_DISTANCE: f32 = 8.0;

/// Steering parameters and the live target point, if any.
#[derive(Component, Clone, Copy, Debug)]
pub struct Steering {
    /// Walking speed in world units per second.
    pub speed: f32,
    /// Distance below which the target is considered reached.
    pub arrival_distance: f32,
    /// Point requested by the last pointer-down, cleared on arrival or when a
    /// directional key takes over.
    pub target: Option<Vector2>,
}

impl Default for Steering {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED, DEFAULT_ARRIVAL_DISTANCE)
    }
}

impl Steering {
    pub fn new(speed: f32, arrival_distance: f32) -> Self {
        Self {
            speed,
            arrival_distance,
            target: None,
        }
    }

    /// Replace the target point. Any previous target is dropped.
    pub fn set_target(&mut self, point: Vector2) {
        self.target = Some(point);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }
}
