//! Display registry
//!
//! Tracks every registered display and which one is active. Displays live
//! in a fixed-capacity arena and are chained newest-first: registering a
//! display links it in as the new head of the chain.
//!
//! # Active display policy
//!
//! - The first display registered becomes active and the rendering engine
//!   is asked for a full redraw.
//! - Later registrations never change the active display.
//! - [`DisplayRegistry::set_active`] switches explicitly and always
//!   requests a redraw.
//!
//! There is no unregister operation; displays live as long as the registry.

mod dispatch;
mod display;

use heapless::Vec;

use crate::config::MAX_DISPLAYS;
use crate::driver::DriverDescriptor;
use crate::error::RegistryError;
use crate::traits::RenderEngine;

pub use display::{Display, DisplayHandle};

/// Display registry
///
/// - `E`: Rendering engine notified on active-display changes
/// - `N`: Maximum number of displays
pub struct DisplayRegistry<'a, E = (), const N: usize = MAX_DISPLAYS> {
    /// Display nodes in registration order
    displays: Vec<Display<'a>, N>,
    /// Most recently registered display
    head: Option<DisplayHandle>,
    /// Display receiving dispatched primitives
    active: Option<DisplayHandle>,
    engine: E,
}

impl<'a, const N: usize> Default for DisplayRegistry<'a, (), N> {
    fn default() -> Self {
        Self::new(())
    }
}

impl<'a, E, const N: usize> DisplayRegistry<'a, E, N> {
    /// Create an empty registry
    pub const fn new(engine: E) -> Self {
        Self {
            displays: Vec::new(),
            head: None,
            active: None,
            engine,
        }
    }

    /// Currently active display, if any
    pub fn get_active(&self) -> Option<DisplayHandle> {
        self.active
    }

    /// Look up a display by handle
    pub fn display(&self, handle: DisplayHandle) -> Option<&Display<'a>> {
        self.displays.get(handle.0)
    }

    /// Walk the display chain
    ///
    /// Passing `None` yields the head (the most recently registered display).
    /// Passing a handle yields the display linked after it, or `None` at the
    /// end of the chain or for a handle this registry did not issue.
    pub fn next(&self, previous: Option<DisplayHandle>) -> Option<DisplayHandle> {
        match previous {
            None => self.head,
            Some(handle) => self.display(handle).and_then(Display::next),
        }
    }

    /// Iterate over all displays, newest first
    pub fn iter(&self) -> Displays<'_, 'a, E, N> {
        Displays {
            registry: self,
            cursor: self.head,
        }
    }

    /// Number of registered displays
    pub fn len(&self) -> usize {
        self.displays.len()
    }

    /// Check if no display is registered
    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    /// Maximum number of displays
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get access to the rendering engine hook
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get mutable access to the rendering engine hook
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Descriptor of the active display, copied out
    pub fn active_driver(&self) -> Option<DriverDescriptor<'a>> {
        self.active
            .and_then(|handle| self.display(handle))
            .map(|display| display.driver)
    }
}

impl<'a, E: RenderEngine, const N: usize> DisplayRegistry<'a, E, N> {
    /// Register a display driver
    ///
    /// The descriptor is copied into a new display node linked in as the
    /// head of the chain. The first display registered becomes active and
    /// triggers a full redraw.
    ///
    /// Returns `RegistryError::Allocation` when the registry is full; the
    /// registry is left unchanged.
    pub fn register(
        &mut self,
        driver: DriverDescriptor<'a>,
    ) -> Result<DisplayHandle, RegistryError> {
        let handle = DisplayHandle(self.displays.len());
        let first = self.displays.is_empty();

        let node = Display {
            driver,
            next: self.head,
        };

        if self.displays.push(node).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display registry full ({} displays)", N);
            return Err(RegistryError::Allocation);
        }

        self.head = Some(handle);

        if first {
            self.active = Some(handle);
            self.engine.invalidate_screen();
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Display {} registered (active: {})", handle.0, first);

        Ok(handle)
    }

    /// Make a display the active one
    ///
    /// Always requests a full redraw, even when `handle` is already active.
    pub fn set_active(&mut self, handle: DisplayHandle) -> Result<(), RegistryError> {
        if self.display(handle).is_none() {
            return Err(RegistryError::UnknownDisplay);
        }

        self.active = Some(handle);
        self.engine.invalidate_screen();

        #[cfg(feature = "defmt")]
        defmt::debug!("Display {} active", handle.0);

        Ok(())
    }
}

/// Iterator over registered displays, newest first
pub struct Displays<'r, 'a, E, const N: usize> {
    registry: &'r DisplayRegistry<'a, E, N>,
    cursor: Option<DisplayHandle>,
}

impl<'r, 'a, E, const N: usize> Iterator for Displays<'r, 'a, E, N> {
    type Item = (DisplayHandle, &'r Display<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        let display = self.registry.display(handle)?;
        self.cursor = display.next;
        Some((handle, display))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Area;
    use crate::color::Color;
    use crate::traits::RedrawRequest;

    fn noop_fill(_: Area, _: Color) {}

    #[test]
    fn test_empty_registry() {
        let registry: DisplayRegistry = DisplayRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.capacity(), MAX_DISPLAYS);
        assert_eq!(registry.get_active(), None);
        assert_eq!(registry.next(None), None);
        assert!(registry.active_driver().is_none());
    }

    #[test]
    fn test_first_registration_becomes_active() {
        let mut registry: DisplayRegistry<RedrawRequest> =
            DisplayRegistry::new(RedrawRequest::new());

        let first = registry.register(DriverDescriptor::new()).unwrap();
        assert_eq!(registry.get_active(), Some(first));
        assert_eq!(registry.engine().requests(), 1);

        let second = registry.register(DriverDescriptor::new()).unwrap();
        assert_ne!(first, second);
        // Second registration leaves the active display alone
        assert_eq!(registry.get_active(), Some(first));
        assert_eq!(registry.engine().requests(), 1);
    }

    #[test]
    fn test_registry_copies_descriptor() {
        let mut registry: DisplayRegistry = DisplayRegistry::default();

        let handle = {
            let mut local = DriverDescriptor::new();
            local.initialize();
            local.fill = Some(&noop_fill);
            registry.register(local).unwrap()
        };

        let display = registry.display(handle).unwrap();
        assert!(display.driver().fill.is_some());
        assert!(display.driver().map.is_none());
    }

    #[test]
    fn test_allocation_failure_leaves_registry_unchanged() {
        let mut registry: DisplayRegistry<RedrawRequest, 2> =
            DisplayRegistry::new(RedrawRequest::new());

        let first = registry.register(DriverDescriptor::new()).unwrap();
        let second = registry.register(DriverDescriptor::new()).unwrap();

        assert_eq!(
            registry.register(DriverDescriptor::new()),
            Err(RegistryError::Allocation)
        );
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.next(None), Some(second));
        assert_eq!(registry.get_active(), Some(first));
        assert_eq!(registry.engine().requests(), 1);
    }

    #[test]
    fn test_set_active() {
        let mut registry: DisplayRegistry<RedrawRequest> =
            DisplayRegistry::new(RedrawRequest::new());
        let _first = registry.register(DriverDescriptor::new()).unwrap();
        let second = registry.register(DriverDescriptor::new()).unwrap();
        registry.engine_mut().take();
        let before = registry.engine().requests();

        registry.set_active(second).unwrap();
        assert_eq!(registry.get_active(), Some(second));
        assert_eq!(registry.engine().requests(), before + 1);
        assert!(registry.engine_mut().take());
    }

    #[test]
    fn test_set_active_unknown_handle() {
        let mut registry: DisplayRegistry<RedrawRequest> =
            DisplayRegistry::new(RedrawRequest::new());
        let first = registry.register(DriverDescriptor::new()).unwrap();

        assert_eq!(
            registry.set_active(DisplayHandle(7)),
            Err(RegistryError::UnknownDisplay)
        );
        assert_eq!(registry.get_active(), Some(first));
        assert_eq!(registry.engine().requests(), 1);
    }

    #[test]
    fn test_enumeration_newest_first() {
        let mut registry: DisplayRegistry = DisplayRegistry::default();
        let a = registry.register(DriverDescriptor::new()).unwrap();
        let b = registry.register(DriverDescriptor::new()).unwrap();
        let c = registry.register(DriverDescriptor::new()).unwrap();

        assert_eq!(registry.next(None), Some(c));
        assert_eq!(registry.next(Some(c)), Some(b));
        assert_eq!(registry.next(Some(b)), Some(a));
        assert_eq!(registry.next(Some(a)), None);

        let order: Vec<DisplayHandle, 4> = registry.iter().map(|(h, _)| h).collect();
        assert_eq!(order.as_slice(), &[c, b, a]);
    }

    #[test]
    fn test_next_with_foreign_handle() {
        let mut registry: DisplayRegistry = DisplayRegistry::default();
        registry.register(DriverDescriptor::new()).unwrap();
        assert_eq!(registry.next(Some(DisplayHandle(3))), None);
    }
}
