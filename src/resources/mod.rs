//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, asset stores
//! and configuration.
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `screensize` – current viewport dimensions in pixels
//! - `spritesheet` – frame geometry of loaded sprite sheets
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod spritesheet;
pub mod texturestore;
pub mod worldtime;
