//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame, writes
//! held keys into [`InputState`] and triggers events for edge-style input:
//! [`PointerDownEvent`] on a left click or tap and [`SwitchDebugEvent`] on the
//! debug key.
use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::components::facing::Facing;
use crate::events::pointer::PointerDownEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard and pointer input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for facing in Facing::ALL {
        let key = match facing {
            Facing::Up => input.direction_up.key_binding,
            Facing::Left => input.direction_left.key_binding,
            Facing::Down => input.direction_down.key_binding,
            Facing::Right => input.direction_right.key_binding,
        };
        input.set_direction(facing, rl.is_key_down(key));
    }

    input.mode_debug.active = rl.is_key_down(input.mode_debug.key_binding);
    input.mode_debug.just_pressed = rl.is_key_pressed(input.mode_debug.key_binding);
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    // Touch input is reported as the left mouse button.
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.trigger(PointerDownEvent {
            position: rl.get_mouse_position(),
        });
    }
}
