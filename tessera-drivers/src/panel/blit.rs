//! Stride-tracking color map copy
//!
//! A color map always covers the full, unclipped area the engine asked for.
//! When the panel clips that area, the clipped-away pixels still occupy
//! buffer entries, so the read cursor advances by the unclipped stride.

use tessera_core::Area;
use tessera_core::Color;

/// Copy the `clipped` part of a color map laid out over `area`
///
/// `put` receives every visible pixel in row-major order. Buffer entries for
/// columns and rows outside `clipped` are skipped. Drawing stops early if
/// `colors` runs out.
///
/// Returns the number of buffer entries consumed: one full unclipped row per
/// visible row, plus the rows clipped off the top.
pub fn blit<F>(area: &Area, clipped: &Area, colors: &[Color], mut put: F) -> usize
where
    F: FnMut(u16, u16, Color),
{
    let stride = area.width() as usize;
    let skip_top = clipped.y1.abs_diff(area.y1) as usize;
    let skip_left = clipped.x1.abs_diff(area.x1) as usize;
    let skip_right = area.x2.abs_diff(clipped.x2) as usize;

    let mut cursor = skip_top.saturating_mul(stride);

    for y in clipped.y1..=clipped.y2 {
        cursor = cursor.saturating_add(skip_left);

        for x in clipped.x1..=clipped.x2 {
            let Some(&color) = colors.get(cursor) else {
                return colors.len();
            };
            // Clipped coordinates are inside the panel, so they fit in u16
            put(x as u16, y as u16, color);
            cursor += 1;
        }

        cursor = cursor.saturating_add(skip_right);
    }

    cursor
}
