//! Drawing primitive traits
//!
//! One trait per descriptor slot. Primitives take `&self` so a descriptor
//! can hold plain shared references and stay `Copy`; implementors that keep
//! state use interior mutability.
//!
//! Every trait is implemented for matching closures, so a board can populate
//! a slot with either a driver object or a bare function:
//!
//! ```
//! use tessera_core::{Area, Color, DriverDescriptor};
//!
//! let fill = |_area: Area, _color: Color| {};
//! let desc = DriverDescriptor::new().with_fill(&fill);
//! assert!(desc.fill.is_some());
//! ```

use crate::area::Area;
use crate::color::Color;
#[cfg(feature = "gpu")]
use crate::color::Opacity;

/// Fill a rectangular area with a flat color
pub trait FillRect {
    fn fill(&self, area: Area, color: Color);
}

/// Put an externally supplied color map onto an area
///
/// `colors` holds `area.width() * area.height()` entries in row-major order.
pub trait MapArea {
    fn map(&self, area: Area, colors: &[Color]);
}

/// Flush a region of the engine's internal render buffer to the panel
///
/// `colors` holds `area.width() * area.height()` entries in row-major order.
/// Implementors report completion back to the engine once the buffer may
/// be reused.
pub trait FlushArea {
    fn flush(&self, area: Area, colors: &[Color]);
}

/// Blend source pixels into destination memory (GPU accelerated)
#[cfg(feature = "gpu")]
pub trait MemBlend {
    /// Blend `src` into `dest` at `opa`
    ///
    /// The blended length is `src.len()`, bounded by `dest.len()`.
    fn mem_blend(&self, dest: &mut [Color], src: &[Color], opa: Opacity);
}

/// Fill destination memory with a flat color (GPU accelerated)
#[cfg(feature = "gpu")]
pub trait MemFill {
    fn mem_fill(&self, dest: &mut [Color], color: Color);
}

impl<F: Fn(Area, Color)> FillRect for F {
    fn fill(&self, area: Area, color: Color) {
        self(area, color)
    }
}

impl<F: Fn(Area, &[Color])> MapArea for F {
    fn map(&self, area: Area, colors: &[Color]) {
        self(area, colors)
    }
}

impl<F: Fn(Area, &[Color])> FlushArea for F {
    fn flush(&self, area: Area, colors: &[Color]) {
        self(area, colors)
    }
}

#[cfg(feature = "gpu")]
impl<F: Fn(&mut [Color], &[Color], Opacity)> MemBlend for F {
    fn mem_blend(&self, dest: &mut [Color], src: &[Color], opa: Opacity) {
        self(dest, src, opa)
    }
}

#[cfg(feature = "gpu")]
impl<F: Fn(&mut [Color], Color)> MemFill for F {
    fn mem_fill(&self, dest: &mut [Color], color: Color) {
        self(dest, color)
    }
}
