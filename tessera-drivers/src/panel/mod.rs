//! Clipping panel driver
//!
//! Implements the fill/map/flush primitives for one physical panel on top
//! of an [`LcdController`]. Every request is clipped to the panel before it
//! reaches the controller:
//!
//! 1. Areas entirely outside the panel (right/bottom edge negative, or
//!    left/top edge past the last column/row) are dropped.
//! 2. Remaining edges are clamped to the panel.
//! 3. Color maps are read with the unclipped stride (see [`blit()`]).
//!
//! Colors are written with the alpha channel forced opaque. After every
//! map/flush, including ones dropped as off-panel, the driver raises the
//! engine's [`FlushReady`] notifier: the color buffer is no longer read.

mod blit;

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use tessera_core::config::ConfigError;
use tessera_core::traits::{FillRect, FlushArea, FlushReady, MapArea};
use tessera_core::{Area, Color, PanelConfig};
use tessera_hal::LcdController;

pub use blit::blit;

struct PanelState<L> {
    lcd: L,
    /// Buffer entries consumed by the last map/flush
    last_consumed: usize,
}

/// Panel driver
///
/// Primitives take `&self` so one driver can back several descriptor slots.
/// The controller sits behind a critical-section mutex, which makes the
/// driver `Sync` for any `Send` controller and lets it be registered with a
/// `static` registry. Output runs inside the critical section.
pub struct PanelDriver<'a, L> {
    state: Mutex<CriticalSectionRawMutex, RefCell<PanelState<L>>>,
    config: PanelConfig,
    flush_ready: &'a (dyn FlushReady + Sync),
}

impl<'a, L: LcdController> PanelDriver<'a, L> {
    /// Create a panel driver with explicit geometry
    ///
    /// Flush completion goes nowhere until [`with_flush_ready`] is set.
    ///
    /// [`with_flush_ready`]: Self::with_flush_ready
    pub fn new(lcd: L, config: PanelConfig) -> Self {
        Self {
            state: Mutex::new(RefCell::new(PanelState {
                lcd,
                last_consumed: 0,
            })),
            config,
            flush_ready: &(),
        }
    }

    /// Create a panel driver using the controller's reported dimensions
    pub fn from_controller(lcd: L) -> Result<Self, ConfigError> {
        let dims = lcd.dimensions();
        let config = PanelConfig::new(dims.width, dims.height)?;
        Ok(Self::new(lcd, config))
    }

    /// Notify `ready` whenever a map/flush has released its color buffer
    ///
    /// Usually the rendering engine's signal, e.g. an embassy-sync
    /// `Signal<CriticalSectionRawMutex, ()>` the draw task waits on.
    pub fn with_flush_ready(mut self, ready: &'a (dyn FlushReady + Sync)) -> Self {
        self.flush_ready = ready;
        self
    }

    /// Panel geometry
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Number of buffer entries the last map/flush consumed
    pub fn last_consumed(&self) -> usize {
        self.state.lock(|state| state.borrow().last_consumed)
    }

    /// Run a closure with the controller
    pub fn with_lcd<U>(&self, f: impl FnOnce(&mut L) -> U) -> U {
        self.state.lock(|state| f(&mut state.borrow_mut().lcd))
    }

    /// Consume the driver, returning the controller
    pub fn into_inner(self) -> L {
        self.state.into_inner().into_inner().lcd
    }

    fn write_area(&self, area: Area, colors: &[Color]) {
        if let Some(clipped) = area.clip(&self.config) {
            #[cfg(feature = "defmt")]
            if colors.len() < area.size() {
                defmt::warn!(
                    "Color buffer short: {} entries for {} pixels",
                    colors.len(),
                    area.size()
                );
            }

            self.state.lock(|state| match state.try_borrow_mut() {
                Ok(mut state) => {
                    let PanelState { lcd, last_consumed } = &mut *state;
                    *last_consumed = blit(&area, &clipped, colors, |x, y, color| {
                        lcd.draw_pixel(x, y, color.opaque().into_raw());
                    });
                }
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("LCD busy, dropping area");
                }
            });
        } else {
            self.state.lock(|state| {
                if let Ok(mut state) = state.try_borrow_mut() {
                    state.last_consumed = 0;
                }
            });
        }

        self.flush_ready.flush_ready();
    }
}

impl<L: LcdController> FillRect for PanelDriver<'_, L> {
    fn fill(&self, area: Area, color: Color) {
        let Some(clipped) = area.clip(&self.config) else {
            return;
        };

        self.state.lock(|state| {
            let Ok(mut state) = state.try_borrow_mut() else {
                #[cfg(feature = "defmt")]
                defmt::warn!("LCD busy, dropping fill");
                return;
            };

            // Clipped areas are inside the panel, so every value fits in u16
            state.lcd.fill_rect(
                clipped.x1 as u16,
                clipped.y1 as u16,
                clipped.width() as u16,
                clipped.height() as u16,
                color.opaque().into_raw(),
            );
        });
    }
}

impl<L: LcdController> MapArea for PanelDriver<'_, L> {
    fn map(&self, area: Area, colors: &[Color]) {
        self.write_area(area, colors);
    }
}

impl<L: LcdController> FlushArea for PanelDriver<'_, L> {
    fn flush(&self, area: Area, colors: &[Color]) {
        self.write_area(area, colors);
    }
}
