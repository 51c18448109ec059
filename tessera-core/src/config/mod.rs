//! Configuration types
//!
//! Board-agnostic configuration for panels and the display registry.

pub mod panel;

pub use panel::*;

/// Default number of displays a registry can hold
pub const MAX_DISPLAYS: usize = 4;
