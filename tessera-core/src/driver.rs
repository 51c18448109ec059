//! Display driver descriptor
//!
//! A descriptor is the capability record a board hands to the registry:
//! one optional reference per drawing primitive. Any slot left empty means
//! "unsupported" and is never invoked.
//!
//! Slots hold `Sync` references, so a registry of descriptors can live in a
//! `static` and be dispatched from any context.

use core::fmt;

#[cfg(feature = "gpu")]
use crate::traits::{MemBlend, MemFill};
use crate::traits::{FillRect, FlushArea, MapArea};

/// Driver descriptor
///
/// Built by board support code, populated with the primitives the panel
/// supports, then copied into the registry by [`register`]. The board's copy
/// can be dropped afterwards.
///
/// [`register`]: crate::registry::DisplayRegistry::register
#[derive(Clone, Copy, Default)]
pub struct DriverDescriptor<'a> {
    /// Fill an area with a color
    pub fill: Option<&'a (dyn FillRect + Sync)>,
    /// Write a color map to an area
    pub map: Option<&'a (dyn MapArea + Sync)>,
    /// Flush the internal render buffer to an area
    pub flush: Option<&'a (dyn FlushArea + Sync)>,
    /// Blend pixel memory (optional GPU capability)
    #[cfg(feature = "gpu")]
    pub mem_blend: Option<&'a (dyn MemBlend + Sync)>,
    /// Fill pixel memory (optional GPU capability)
    #[cfg(feature = "gpu")]
    pub mem_fill: Option<&'a (dyn MemFill + Sync)>,
}

impl<'a> DriverDescriptor<'a> {
    /// Create a descriptor with every primitive absent
    pub const fn new() -> Self {
        Self {
            fill: None,
            map: None,
            flush: None,
            #[cfg(feature = "gpu")]
            mem_blend: None,
            #[cfg(feature = "gpu")]
            mem_fill: None,
        }
    }

    /// Reset every primitive to absent
    ///
    /// Use before populating a descriptor that may hold slots from an
    /// earlier configuration.
    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    pub fn with_fill(mut self, fill: &'a (dyn FillRect + Sync)) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_map(mut self, map: &'a (dyn MapArea + Sync)) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_flush(mut self, flush: &'a (dyn FlushArea + Sync)) -> Self {
        self.flush = Some(flush);
        self
    }

    #[cfg(feature = "gpu")]
    pub fn with_mem_blend(mut self, mem_blend: &'a (dyn MemBlend + Sync)) -> Self {
        self.mem_blend = Some(mem_blend);
        self
    }

    #[cfg(feature = "gpu")]
    pub fn with_mem_fill(mut self, mem_fill: &'a (dyn MemFill + Sync)) -> Self {
        self.mem_fill = Some(mem_fill);
        self
    }

    /// True if no primitive is set
    pub fn is_empty(&self) -> bool {
        let core_empty = self.fill.is_none() && self.map.is_none() && self.flush.is_none();

        #[cfg(feature = "gpu")]
        let gpu_empty = self.mem_blend.is_none() && self.mem_fill.is_none();
        #[cfg(not(feature = "gpu"))]
        let gpu_empty = true;

        core_empty && gpu_empty
    }
}

impl fmt::Debug for DriverDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DriverDescriptor");
        s.field("fill", &self.fill.is_some())
            .field("map", &self.map.is_some())
            .field("flush", &self.flush.is_some());
        #[cfg(feature = "gpu")]
        s.field("mem_blend", &self.mem_blend.is_some())
            .field("mem_fill", &self.mem_fill.is_some());
        s.finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DriverDescriptor<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "DriverDescriptor[fill={}, map={}, flush={}",
            self.fill.is_some(),
            self.map.is_some(),
            self.flush.is_some()
        );
        #[cfg(feature = "gpu")]
        defmt::write!(
            f,
            ", mem_blend={}, mem_fill={}",
            self.mem_blend.is_some(),
            self.mem_fill.is_some()
        );
        defmt::write!(f, "]");
    }
}
