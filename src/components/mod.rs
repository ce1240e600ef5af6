//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback state and the directional walk-cycle layout
//! - [`boxcollider`] – axis-aligned box kept inside the world bounds
//! - [`facing`] – discrete facing direction shared by input and animation
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`scale`] – 2D scale factor for sprites
//! - [`sprite`] – 2D sprite rendering component
//! - [`steering`] – walking speed and the pointer target point

pub mod animation;
pub mod boxcollider;
pub mod facing;
pub mod mapposition;
pub mod rigidbody;
pub mod scale;
pub mod sprite;
pub mod steering;
