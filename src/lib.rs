//! Bulldog walk library.
//!
//! This module exposes the game's ECS components, resources, systems, events
//! and the walking scene for use in integration tests and headless drivers.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
