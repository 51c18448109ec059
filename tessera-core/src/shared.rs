//! Mutex-guarded display registry
//!
//! For targets where one context drives the display while another registers
//! or switches displays (a second core, an interrupt handler). Registration
//! and active selection run under the lock. Dispatch copies the active
//! descriptor out under the lock exactly once, then calls the primitive with
//! the lock released, so long-running primitives never block registration.
//!
//! The rendering engine hook runs while the lock is held and must not call
//! back into the same registry.
//!
//! With a `Sync` raw mutex and engine the registry is itself `Sync` and can
//! be declared as a `static`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::area::Area;
use crate::color::Color;
#[cfg(feature = "gpu")]
use crate::color::Opacity;
use crate::config::MAX_DISPLAYS;
use crate::driver::DriverDescriptor;
use crate::error::RegistryError;
use crate::registry::{DisplayHandle, DisplayRegistry};
use crate::traits::RenderEngine;

/// Display registry shared between execution contexts
pub struct SharedRegistry<'a, M: RawMutex, E = (), const N: usize = MAX_DISPLAYS> {
    inner: Mutex<M, RefCell<DisplayRegistry<'a, E, N>>>,
}

impl<'a, M: RawMutex, E, const N: usize> SharedRegistry<'a, M, E, N> {
    /// Create an empty shared registry
    pub const fn new(engine: E) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(DisplayRegistry::new(engine))),
        }
    }

    /// Run a closure with exclusive access to the registry
    pub fn lock<U>(&self, f: impl FnOnce(&mut DisplayRegistry<'a, E, N>) -> U) -> U {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Run a closure with exclusive access to the rendering engine hook
    pub fn lock_engine<U>(&self, f: impl FnOnce(&mut E) -> U) -> U {
        self.lock(|registry| f(registry.engine_mut()))
    }

    pub fn get_active(&self) -> Option<DisplayHandle> {
        self.inner.lock(|cell| cell.borrow().get_active())
    }

    pub fn next(&self, previous: Option<DisplayHandle>) -> Option<DisplayHandle> {
        self.inner.lock(|cell| cell.borrow().next(previous))
    }

    pub fn len(&self) -> usize {
        self.inner.lock(|cell| cell.borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load the active descriptor once
    fn active_driver(&self) -> Option<DriverDescriptor<'a>> {
        self.inner.lock(|cell| cell.borrow().active_driver())
    }

    pub fn fill(&self, area: Area, color: Color) {
        if let Some(fill) = self.active_driver().and_then(|d| d.fill) {
            fill.fill(area, color);
        }
    }

    pub fn flush(&self, area: Area, colors: &[Color]) {
        if let Some(flush) = self.active_driver().and_then(|d| d.flush) {
            flush.flush(area, colors);
        }
    }

    pub fn map(&self, area: Area, colors: &[Color]) {
        if let Some(map) = self.active_driver().and_then(|d| d.map) {
            map.map(area, colors);
        }
    }

    #[cfg(feature = "gpu")]
    pub fn mem_blend(&self, dest: &mut [Color], src: &[Color], opa: Opacity) {
        if let Some(blend) = self.active_driver().and_then(|d| d.mem_blend) {
            blend.mem_blend(dest, src, opa);
        }
    }

    #[cfg(feature = "gpu")]
    pub fn mem_fill(&self, dest: &mut [Color], color: Color) {
        if let Some(fill) = self.active_driver().and_then(|d| d.mem_fill) {
            fill.mem_fill(dest, color);
        }
    }

    #[cfg(feature = "gpu")]
    pub fn supports_mem_blend(&self) -> Result<bool, RegistryError> {
        self.inner.lock(|cell| cell.borrow().supports_mem_blend())
    }

    #[cfg(feature = "gpu")]
    pub fn supports_mem_fill(&self) -> Result<bool, RegistryError> {
        self.inner.lock(|cell| cell.borrow().supports_mem_fill())
    }
}

impl<'a, M: RawMutex, E: RenderEngine, const N: usize> SharedRegistry<'a, M, E, N> {
    /// Register a display driver (see [`DisplayRegistry::register`])
    pub fn register(&self, driver: DriverDescriptor<'a>) -> Result<DisplayHandle, RegistryError> {
        self.lock(|registry| registry.register(driver))
    }

    /// Make a display the active one (see [`DisplayRegistry::set_active`])
    pub fn set_active(&self, handle: DisplayHandle) -> Result<(), RegistryError> {
        self.lock(|registry| registry.set_active(handle))
    }
}
