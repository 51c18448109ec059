//! Pixel color and opacity types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 32-bit ARGB8888 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Self = Self::rgb(0xFF, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 0xFF, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 0xFF);

    /// Create a color from a raw ARGB8888 word
    pub const fn from_raw(argb: u32) -> Self {
        Self(argb)
    }

    /// Create a color from its channels with alpha left at zero
    ///
    /// The alpha byte is not meaningful to the dispatch layer; panels force
    /// it opaque on output.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create a color from all four channels
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Raw ARGB8888 word
    pub const fn into_raw(self) -> u32 {
        self.0
    }

    /// Same color with the alpha channel forced to 0xFF
    pub const fn opaque(self) -> Self {
        Self(self.0 | 0xFF00_0000)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Mix `fg` over `bg` at the given opacity
    ///
    /// Each channel is `(fg * opa + bg * (255 - opa)) / 255`. The result keeps
    /// the alpha of `bg`.
    pub fn mix(fg: Self, bg: Self, opa: Opacity) -> Self {
        let mix = |f: u8, b: u8| -> u8 {
            let o = opa.0 as u16;
            ((f as u16 * o + b as u16 * (255 - o)) / 255) as u8
        };

        Self::argb(
            bg.alpha(),
            mix(fg.red(), bg.red()),
            mix(fg.green(), bg.green()),
            mix(fg.blue(), bg.blue()),
        )
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Opacity from fully transparent (0) to fully opaque (255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Opacity(pub u8);

impl Opacity {
    /// Fully transparent
    pub const TRANSPARENT: Self = Self(0);
    /// Fully covering
    pub const COVER: Self = Self(255);
    /// Half transparent
    pub const HALF: Self = Self(128);

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::COVER
    }
}
