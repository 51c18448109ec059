//! Driver and engine abstraction traits
//!
//! These traits define the two seams of the dispatch layer: the drawing
//! primitives a board supplies, and the rendering engine hooks the registry
//! and panels signal (output target changed, color buffer consumed).

pub mod engine;
pub mod primitives;

pub use engine::{FlushReady, RedrawRequest, RenderEngine};
#[cfg(feature = "gpu")]
pub use primitives::{MemBlend, MemFill};
pub use primitives::{FillRect, FlushArea, MapArea};
