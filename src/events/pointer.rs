//! Pointer-down event and the observer that turns it into a walk target.
//!
//! The input poller triggers [`PointerDownEvent`] when the left mouse button
//! (or a tap) goes down. The observer runs immediately, so a new target
//! replaces any in-progress walk before steering runs in the same frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::steering::Steering;

/// A pointer went down at `position` (screen coordinates, which are also world
/// coordinates in this top-down view).
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerDownEvent {
    pub position: Vector2,
}

/// Store the pointer position as the new target of every steered entity.
pub fn pointer_down_observer(trigger: On<PointerDownEvent>, mut query: Query<&mut Steering>) {
    let position = trigger.event().position;
    for mut steering in query.iter_mut() {
        debug!("Walk target set to ({:.1}, {:.1})", position.x, position.y);
        steering.set_target(position);
    }
}
