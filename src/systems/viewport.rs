//! Viewport tracking.
//!
//! The window is resizable and the viewport always matches it, so the
//! [`ScreenSize`] resource (and with it the world bounds and the background
//! grid) follows the window every frame.
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::screensize::ScreenSize;

/// Copy the current window size into `ScreenSize` when it changed.
pub fn update_screen_size(rl: NonSend<raylib::RaylibHandle>, mut screen: ResMut<ScreenSize>) {
    let current = ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    if *screen != current {
        info!(
            "Viewport resized: {}x{} -> {}x{}",
            screen.w, screen.h, current.w, current.h
        );
        *screen = current;
    }
}
