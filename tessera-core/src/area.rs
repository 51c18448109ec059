//! Rectangular drawing areas

use crate::config::PanelConfig;

/// Inclusive rectangle in panel coordinates
///
/// Coordinates are signed: the rendering engine may hand over areas that
/// extend past any edge of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Area {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Area {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width in pixels (zero for inverted areas)
    pub const fn width(&self) -> u32 {
        if self.x2 < self.x1 {
            0
        } else {
            self.x2.abs_diff(self.x1).saturating_add(1)
        }
    }

    /// Height in pixels (zero for inverted areas)
    pub const fn height(&self) -> u32 {
        if self.y2 < self.y1 {
            0
        } else {
            self.y2.abs_diff(self.y1).saturating_add(1)
        }
    }

    /// Number of pixels covered, saturating at `usize::MAX`
    pub const fn size(&self) -> usize {
        (self.width() as usize).saturating_mul(self.height() as usize)
    }

    /// True if the area covers no pixel
    pub const fn is_empty(&self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }

    /// Clip the area to a panel
    ///
    /// Returns `None` when the area lies entirely outside the panel: its
    /// right or bottom edge is negative, or its left or top edge is past the
    /// last column or row. Otherwise every edge is clamped into
    /// `[0, hor_res - 1] x [0, ver_res - 1]`.
    pub fn clip(&self, panel: &PanelConfig) -> Option<Area> {
        if self.is_empty() {
            return None;
        }

        if self.x2 < 0 || self.y2 < 0 {
            return None;
        }

        if self.x1 > panel.last_column() || self.y1 > panel.last_row() {
            return None;
        }

        Some(Area {
            x1: self.x1.max(0),
            y1: self.y1.max(0),
            x2: self.x2.min(panel.last_column()),
            y2: self.y2.min(panel.last_row()),
        })
    }
}
