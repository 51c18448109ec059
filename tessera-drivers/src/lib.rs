//! Display driver implementations
//!
//! This crate provides concrete implementations of the primitive traits
//! defined in tessera-core:
//!
//! - Panel driver (clipping fill/map/flush over any `LcdController`)
//! - Software GPU (memory blend and fill for boards without an accelerator)
//! - Board registration helpers

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod board;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod panel;

pub use board::register_panel;
#[cfg(feature = "gpu")]
pub use board::register_panel_with_gpu;
#[cfg(feature = "gpu")]
pub use gpu::SoftGpu;
pub use panel::PanelDriver;
