//! Registered display nodes

use crate::driver::DriverDescriptor;

/// Opaque reference to a registered display
///
/// Handles are only issued by [`DisplayRegistry::register`] and stay valid
/// for the lifetime of the registry that issued them.
///
/// [`DisplayRegistry::register`]: super::DisplayRegistry::register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayHandle(pub(crate) usize);

impl DisplayHandle {
    /// Position of the display in registration order (0 = first registered)
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A registered display
///
/// Owns its copy of the driver descriptor, which is never modified after
/// registration, and links to the next display in the chain.
#[derive(Debug, Clone, Copy)]
pub struct Display<'a> {
    pub(crate) driver: DriverDescriptor<'a>,
    pub(crate) next: Option<DisplayHandle>,
}

impl<'a> Display<'a> {
    /// The descriptor copied in at registration
    pub fn driver(&self) -> &DriverDescriptor<'a> {
        &self.driver
    }

    /// Next display in the chain
    pub fn next(&self) -> Option<DisplayHandle> {
        self.next
    }
}
