//! Steering controller.
//!
//! Turns the held arrow key, or failing that the pointer target point, into a
//! velocity on the entity's [`RigidBody`]. Exactly one source governs the
//! velocity each frame: a held key always wins and discards the target.
//!
//! Entities with a [`BoxCollider`] have their target pulled into the part of
//! the viewport the collider can occupy, so every target is reachable even
//! after the window shrinks.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::steering::Steering;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::bounds::reachable_point;

/// Compute this frame's velocity and update the target point.
///
/// - `held`: the direction key governing movement, if any.
/// - `delta`: frame time in seconds. When positive, point steering never
///   covers more than the remaining distance in one frame.
pub fn steer(
    position: Vector2,
    held: Option<Facing>,
    steering: &mut Steering,
    delta: f32,
) -> Vector2 {
    if let Some(direction) = held {
        if steering.target.take().is_some() {
            debug!("Walk target cancelled by {} key", direction);
        }
        return direction.unit_vector().scale_by(steering.speed);
    }

    let Some(target) = steering.target else {
        return Vector2::zero();
    };

    let distance = position.distance_to(target);
    if distance < steering.arrival_distance {
        debug!("Walk target ({:.1}, {:.1}) reached", target.x, target.y);
        steering.clear_target();
        return Vector2::zero();
    }

    let heading = target - position;
    let angle = heading.y.atan2(heading.x);
    let speed = if delta > 0.0 {
        steering.speed.min(distance / delta)
    } else {
        steering.speed
    };
    Vector2 {
        x: speed * angle.cos(),
        y: speed * angle.sin(),
    }
}

/// Update each steered entity's `RigidBody` velocity from input.
///
/// Entities without a `RigidBody` are not matched.
pub fn steering_controller(
    mut query: Query<(
        &MapPosition,
        &mut RigidBody,
        &mut Steering,
        Option<&BoxCollider>,
    )>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    screen: Option<Res<ScreenSize>>,
) {
    let held = input.held_direction();
    for (position, mut rigidbody, mut steering, maybe_collider) in query.iter_mut() {
        if let (Some(target), Some(collider), Some(screen)) =
            (steering.target, maybe_collider, screen.as_deref())
        {
            let reachable = reachable_point(collider, target, screen.w as f32, screen.h as f32);
            if reachable != target {
                steering.target = Some(reachable);
            }
        }
        let velocity = steer(position.pos, held, &mut steering, time.delta);
        rigidbody.set_velocity(velocity);
    }
}
