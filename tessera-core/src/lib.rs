//! Board-agnostic display registry for the Tessera GUI stack
//!
//! This crate sits between a rendering engine and the board's panel
//! drivers:
//!
//! - Drawing primitive traits a board implements (fill, map, flush, and
//!   optional GPU memory blend/fill)
//! - The driver descriptor a board registers
//! - The display registry: registration, active-display selection,
//!   enumeration and primitive dispatch
//! - A mutex-guarded registry for multi-context targets
//! - Color, area and panel configuration types
//!
//! # Example
//!
//! ```
//! use core::sync::atomic::{AtomicU32, Ordering};
//! use tessera_core::{Area, Color, DisplayRegistry, DriverDescriptor, RedrawRequest};
//!
//! let filled = AtomicU32::new(0);
//! let fill = |_area: Area, _color: Color| {
//!     filled.fetch_add(1, Ordering::Relaxed);
//! };
//!
//! let mut registry: DisplayRegistry<RedrawRequest> = DisplayRegistry::new(RedrawRequest::new());
//! let display = registry.register(DriverDescriptor::new().with_fill(&fill)).unwrap();
//!
//! assert_eq!(registry.get_active(), Some(display));
//! assert!(registry.engine_mut().take());
//!
//! registry.fill(Area::new(0, 0, 9, 9), Color::RED);
//! assert_eq!(filled.load(Ordering::Relaxed), 1);
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod area;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod registry;
pub mod shared;
pub mod traits;

// Re-export key types
pub use area::Area;
pub use color::{Color, Opacity};
pub use config::{PanelConfig, MAX_DISPLAYS};
pub use driver::DriverDescriptor;
pub use error::RegistryError;
pub use registry::{Display, DisplayHandle, DisplayRegistry};
pub use shared::SharedRegistry;
pub use traits::{FlushReady, RedrawRequest, RenderEngine};
