//! Registry errors

use core::fmt;

/// Errors reported by the display registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// No room for another display node; the registry is unchanged
    Allocation,
    /// Handle was not issued by this registry
    UnknownDisplay,
    /// Operation needs an active display but none is selected
    NoActiveDisplay,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation => f.write_str("display registry is full"),
            Self::UnknownDisplay => f.write_str("unknown display handle"),
            Self::NoActiveDisplay => f.write_str("no active display"),
        }
    }
}
