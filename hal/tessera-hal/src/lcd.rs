//! LCD controller abstractions
//!
//! Provides the minimal output surface a panel driver needs from an
//! LCD controller. Coordinates are always inside the panel: callers clip
//! before reaching this layer.

/// Raw ARGB8888 pixel value as written to the controller
pub type RawColor = u32;

/// Panel size reported by a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimensions {
    /// Horizontal resolution in pixels
    pub width: u16,
    /// Vertical resolution in pixels
    pub height: u16,
}

impl Dimensions {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// LCD controller output
///
/// Implemented by board support code on top of the vendor LCD peripheral
/// (LTDC, FSMC, SPI panel, ...).
pub trait LcdController {
    /// Write a single pixel
    fn draw_pixel(&mut self, x: u16, y: u16, color: RawColor);

    /// Fill a rectangle with a flat color
    ///
    /// - `x`, `y`: Top-left corner
    /// - `width`, `height`: Size in pixels, both at least 1
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: RawColor);

    /// Panel dimensions in pixels
    fn dimensions(&self) -> Dimensions;
}
