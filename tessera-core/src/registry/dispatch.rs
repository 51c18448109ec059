//! Primitive dispatch
//!
//! Forwards drawing primitives to the active display's descriptor. With no
//! active display, or with the primitive left unset, a call does nothing.

use super::DisplayRegistry;
use crate::area::Area;
use crate::color::Color;
#[cfg(feature = "gpu")]
use crate::color::Opacity;
#[cfg(feature = "gpu")]
use crate::error::RegistryError;

impl<'a, E, const N: usize> DisplayRegistry<'a, E, N> {
    /// Fill an area of the active display with a color
    pub fn fill(&self, area: Area, color: Color) {
        if let Some(fill) = self.active_driver().and_then(|d| d.fill) {
            fill.fill(area, color);
        }
    }

    /// Flush a region of the internal render buffer to the active display
    pub fn flush(&self, area: Area, colors: &[Color]) {
        if let Some(flush) = self.active_driver().and_then(|d| d.flush) {
            flush.flush(area, colors);
        }
    }

    /// Put a color map onto an area of the active display
    pub fn map(&self, area: Area, colors: &[Color]) {
        if let Some(map) = self.active_driver().and_then(|d| d.map) {
            map.map(area, colors);
        }
    }

    /// Blend `src` into `dest` at `opa` using the active display's GPU
    ///
    /// Check [`supports_mem_blend`](Self::supports_mem_blend) first: without
    /// GPU support this does nothing and the caller must blend in software.
    #[cfg(feature = "gpu")]
    pub fn mem_blend(&self, dest: &mut [Color], src: &[Color], opa: Opacity) {
        if let Some(blend) = self.active_driver().and_then(|d| d.mem_blend) {
            blend.mem_blend(dest, src, opa);
        }
    }

    /// Fill `dest` with a color using the active display's GPU
    #[cfg(feature = "gpu")]
    pub fn mem_fill(&self, dest: &mut [Color], color: Color) {
        if let Some(fill) = self.active_driver().and_then(|d| d.mem_fill) {
            fill.mem_fill(dest, color);
        }
    }

    /// Check if the active display can blend memory
    ///
    /// Returns `RegistryError::NoActiveDisplay` when no display is active.
    #[cfg(feature = "gpu")]
    pub fn supports_mem_blend(&self) -> Result<bool, RegistryError> {
        self.active_driver()
            .map(|d| d.mem_blend.is_some())
            .ok_or(RegistryError::NoActiveDisplay)
    }

    /// Check if the active display can fill memory
    ///
    /// Returns `RegistryError::NoActiveDisplay` when no display is active.
    #[cfg(feature = "gpu")]
    pub fn supports_mem_fill(&self) -> Result<bool, RegistryError> {
        self.active_driver()
            .map(|d| d.mem_fill.is_some())
            .ok_or(RegistryError::NoActiveDisplay)
    }
}
