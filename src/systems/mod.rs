//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – pick walk tracks from velocity and advance sprite frames
//! - [`bounds`] – keep box colliders inside the viewport
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`render`] – draw the grid, sprites and debug overlay using Raylib
//! - [`steering`] – turn held keys or a pointer target into velocity
//! - [`viewport`] – follow window resizes

pub mod animation;
pub mod bounds;
pub mod input;
pub mod movement;
pub mod render;
pub mod steering;
pub mod viewport;
