//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. Defaults use the arrow keys for
//! movement and F11 for the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::facing::Facing;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key went down this frame. Only polled for toggle keys.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_left: BoolState,
    pub direction_down: BoolState,
    pub direction_right: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            direction_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            direction_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            direction_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// The direction key that governs movement this frame.
    ///
    /// Only one axis moves at a time; with several keys held the first of
    /// left, right, up, down wins.
    pub fn held_direction(&self) -> Option<Facing> {
        if self.direction_left.active {
            Some(Facing::Left)
        } else if self.direction_right.active {
            Some(Facing::Right)
        } else if self.direction_up.active {
            Some(Facing::Up)
        } else if self.direction_down.active {
            Some(Facing::Down)
        } else {
            None
        }
    }

    /// Mark a direction key as held (or released). Used by the input poller
    /// and by headless drivers.
    pub fn set_direction(&mut self, facing: Facing, held: bool) {
        let state = match facing {
            Facing::Up => &mut self.direction_up,
            Facing::Left => &mut self.direction_left,
            Facing::Down => &mut self.direction_down,
            Facing::Right => &mut self.direction_right,
        };
        state.active = held;
    }
}
