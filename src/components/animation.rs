//! Sprite animation components.
//!
//! - [`Animation`] holds the playback state of the track an entity is showing.
//! - [`WalkCycle`] tells the animation selector which tracks and idle frames
//!   belong to each [`Facing`].
use bevy_ecs::prelude::Component;

use crate::components::facing::Facing;

#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    /// Position inside the track's frame list (not a sheet index).
    pub frame_index: usize,
    pub elapsed_time: f32,
    pub playing: bool,
}

impl Animation {
    /// A stopped animation pointing at `animation_key`.
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            playing: false,
        }
    }

    /// Start playing `key` from its first frame.
    ///
    /// When `ignore_if_playing` is set and `key` is already running the call
    /// does nothing, so a walk cycle is not restarted every frame.
    pub fn play(&mut self, key: &str, ignore_if_playing: bool) {
        if ignore_if_playing && self.playing && self.animation_key == key {
            return;
        }
        self.animation_key.clear();
        self.animation_key.push_str(key);
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.playing = true;
    }

    /// Stop playback, keeping the current key and frame.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self, key: &str) -> bool {
        self.playing && self.animation_key == key
    }
}

/// Which column of a facing's row is shown while standing still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdleColumn {
    #[default]
    First,
    Second,
}

impl IdleColumn {
    pub fn index(self) -> usize {
        match self {
            IdleColumn::First => 0,
            IdleColumn::Second => 1,
        }
    }

    /// Parse the `idle_column` config value. Only 0 and 1 are valid.
    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(IdleColumn::First),
            1 => Some(IdleColumn::Second),
            _ => None,
        }
    }
}

/// Directional walk cycle laid out as one sheet row per [`Facing`].
#[derive(Debug, Clone, Component)]
pub struct WalkCycle {
    /// Track keys are `<prefix>-<facing>`, e.g. `walk-left`.
    pub prefix: String,
    /// Frames per sheet row.
    pub columns: usize,
    pub idle_column: IdleColumn,
}

impl WalkCycle {
    pub fn new(prefix: impl Into<String>, columns: usize, idle_column: IdleColumn) -> Self {
        Self {
            prefix: prefix.into(),
            columns,
            idle_column,
        }
    }

    pub fn track_key(&self, facing: Facing) -> String {
        format!("{}-{}", self.prefix, facing)
    }

    /// Sheet index of the standing frame for `facing`.
    pub fn idle_frame(&self, facing: Facing) -> usize {
        facing.row() * self.columns + self.idle_column.index()
    }
}
