use bevy_ecs::prelude::Resource;

/// Simulation clock advanced once per rendered frame.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Step the clock by one frame of `dt` seconds.
    ///
    /// Negative deltas (clock hiccups on resume) count as zero.
    pub fn advance(&mut self, dt: f32) {
        self.delta = dt.max(0.0);
        self.elapsed += self.delta;
        self.frame_count += 1;
    }
}
