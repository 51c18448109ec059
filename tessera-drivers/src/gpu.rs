//! Software GPU
//!
//! Memory blend and fill done on the CPU, for boards that want the GPU
//! dispatch path without an accelerator (or as a reference when bringing
//! one up).

use tessera_core::traits::{MemBlend, MemFill};
use tessera_core::{Color, Opacity};

/// CPU implementation of the GPU memory primitives
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftGpu;

impl MemBlend for SoftGpu {
    fn mem_blend(&self, dest: &mut [Color], src: &[Color], opa: Opacity) {
        match opa {
            Opacity::TRANSPARENT => {}
            Opacity::COVER => {
                let len = src.len().min(dest.len());
                dest[..len].copy_from_slice(&src[..len]);
            }
            _ => {
                for (d, s) in dest.iter_mut().zip(src) {
                    *d = Color::mix(*s, *d, opa);
                }
            }
        }
    }
}

impl MemFill for SoftGpu {
    fn mem_fill(&self, dest: &mut [Color], color: Color) {
        dest.fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill() {
        let mut dest = [Color::BLACK; 5];
        SoftGpu.mem_fill(&mut dest, Color::RED);
        assert_eq!(dest, [Color::RED; 5]);
    }

    #[test]
    fn test_blend_cover_copies() {
        let mut dest = [Color::BLACK; 3];
        let src = [Color::WHITE; 2];
        SoftGpu.mem_blend(&mut dest, &src, Opacity::COVER);
        assert_eq!(dest, [Color::WHITE, Color::WHITE, Color::BLACK]);
    }

    #[test]
    fn test_blend_transparent_keeps_dest() {
        let mut dest = [Color::BLACK; 2];
        SoftGpu.mem_blend(&mut dest, &[Color::WHITE; 2], Opacity::TRANSPARENT);
        assert_eq!(dest, [Color::BLACK; 2]);
    }

    #[test]
    fn test_blend_half() {
        let mut dest = [Color::BLACK; 1];
        SoftGpu.mem_blend(&mut dest, &[Color::WHITE], Opacity::HALF);
        assert_eq!(dest[0].red(), 128);
        assert_eq!(dest[0].green(), 128);
        assert_eq!(dest[0].blue(), 128);
    }

    #[test]
    fn test_blend_longer_source_is_bounded() {
        let mut dest = [Color::BLACK; 2];
        SoftGpu.mem_blend(&mut dest, &[Color::WHITE; 4], Opacity::COVER);
        assert_eq!(dest, [Color::WHITE; 2]);
    }
}
