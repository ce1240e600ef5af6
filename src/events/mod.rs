//! Event types and observers.
//!
//! Submodules:
//! - [`pointer`] – pointer-down notifications that set a walk target
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod pointer;
pub mod switchdebug;
