//! World-bounds collision.
//!
//! Keeps every entity with a [`BoxCollider`] inside the viewport described by
//! [`ScreenSize`]. When the box would leave the viewport the position is
//! pushed back and the velocity component heading out is zeroed.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::screensize::ScreenSize;

/// Correction that moves an AABB back inside `[0, w] x [0, h]`.
///
/// A box larger than the bounds is aligned to the top-left edge.
pub fn bounds_correction(min: Vector2, max: Vector2, w: f32, h: f32) -> Vector2 {
    let axis = |lo: f32, hi: f32, limit: f32| {
        if lo < 0.0 {
            -lo
        } else if hi > limit {
            (limit - hi).max(-lo)
        } else {
            0.0
        }
    };
    Vector2 {
        x: axis(min.x, max.x, w),
        y: axis(min.y, max.y, h),
    }
}

/// Closest position to `point` at which `collider` fits inside `[0, w] x [0, h]`.
///
/// Matches where [`bounds_correction`] would leave the entity, so a target
/// moved here can always be reached.
pub fn reachable_point(collider: &BoxCollider, point: Vector2, w: f32, h: f32) -> Vector2 {
    let (lo, hi) = collider.aabb(Vector2::zero());
    let axis = |value: f32, lo: f32, hi: f32, limit: f32| {
        let min = -lo;
        let max = (limit - hi).max(min);
        value.clamp(min, max)
    };
    Vector2 {
        x: axis(point.x, lo.x, hi.x, w),
        y: axis(point.y, lo.y, hi.y, h),
    }
}

pub fn world_bounds_system(
    mut query: Query<(&mut MapPosition, &BoxCollider, Option<&mut RigidBody>)>,
    screen: Res<ScreenSize>,
) {
    let (w, h) = (screen.w as f32, screen.h as f32);
    for (mut position, collider, maybe_rigidbody) in query.iter_mut() {
        let (min, max) = collider.aabb(position.pos);
        let correction = bounds_correction(min, max, w, h);
        if correction.x == 0.0 && correction.y == 0.0 {
            continue;
        }
        position.pos = position.pos + correction;

        if let Some(mut rigidbody) = maybe_rigidbody {
            // Pushed right means it was heading left, and so on.
            if (correction.x > 0.0 && rigidbody.velocity.x < 0.0)
                || (correction.x < 0.0 && rigidbody.velocity.x > 0.0)
            {
                rigidbody.velocity.x = 0.0;
            }
            if (correction.y > 0.0 && rigidbody.velocity.y < 0.0)
                || (correction.y < 0.0 && rigidbody.velocity.y > 0.0)
            {
                rigidbody.velocity.y = 0.0;
            }
        }
    }
}
