//! Panel configuration
//!
//! Physical panel geometry used by panel drivers to clip drawing requests.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal resolution of the reference 800x480 TFT
pub const DEFAULT_HOR_RES: u16 = 800;

/// Vertical resolution of the reference 800x480 TFT
pub const DEFAULT_VER_RES: u16 = 480;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Horizontal or vertical resolution is zero
    ZeroResolution,
}

/// Panel geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Horizontal resolution in pixels
    pub hor_res: u16,
    /// Vertical resolution in pixels
    pub ver_res: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            hor_res: DEFAULT_HOR_RES,
            ver_res: DEFAULT_VER_RES,
        }
    }
}

impl PanelConfig {
    /// Create a panel configuration
    ///
    /// Both resolutions must be at least one pixel.
    pub const fn new(hor_res: u16, ver_res: u16) -> Result<Self, ConfigError> {
        if hor_res == 0 || ver_res == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        Ok(Self { hor_res, ver_res })
    }

    /// Last valid column index
    pub const fn last_column(&self) -> i32 {
        self.hor_res as i32 - 1
    }

    /// Last valid row index
    pub const fn last_row(&self) -> i32 {
        self.ver_res as i32 - 1
    }

    /// Total number of pixels
    pub const fn pixel_count(&self) -> usize {
        self.hor_res as usize * self.ver_res as usize
    }
}
