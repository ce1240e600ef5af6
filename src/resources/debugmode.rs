//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the debug overlay
//! (collider outline, pivot cross, target marker, FPS) should be drawn.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws debug overlays.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
