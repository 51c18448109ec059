//! Board registration helpers
//!
//! Board bring-up code builds a descriptor from its panel driver and hands
//! it to the registry. These helpers do that in one call.

use tessera_core::registry::{DisplayHandle, DisplayRegistry};
#[cfg(feature = "gpu")]
use tessera_core::traits::{MemBlend, MemFill};
use tessera_core::{DriverDescriptor, RegistryError, RenderEngine};
use tessera_hal::LcdController;

use crate::panel::PanelDriver;

/// Descriptor with fill/map/flush backed by `panel`
pub fn panel_descriptor<'a, L>(panel: &'a PanelDriver<'_, L>) -> DriverDescriptor<'a>
where
    L: LcdController + Send + 'a,
{
    let mut driver = DriverDescriptor::new();
    driver.initialize();

    driver.fill = Some(panel);
    driver.map = Some(panel);
    driver.flush = Some(panel);

    driver
}

/// Register a panel with the registry
///
/// The first panel registered becomes the active display.
pub fn register_panel<'a, L, E, const N: usize>(
    registry: &mut DisplayRegistry<'a, E, N>,
    panel: &'a PanelDriver<'_, L>,
) -> Result<DisplayHandle, RegistryError>
where
    L: LcdController + Send + 'a,
    E: RenderEngine,
{
    registry.register(panel_descriptor(panel))
}

/// Register a panel together with GPU memory primitives
#[cfg(feature = "gpu")]
pub fn register_panel_with_gpu<'a, L, G, E, const N: usize>(
    registry: &mut DisplayRegistry<'a, E, N>,
    panel: &'a PanelDriver<'_, L>,
    gpu: &'a G,
) -> Result<DisplayHandle, RegistryError>
where
    L: LcdController + Send + 'a,
    G: MemBlend + MemFill + Sync,
    E: RenderEngine,
{
    let driver = panel_descriptor(panel)
        .with_mem_blend(gpu)
        .with_mem_fill(gpu);

    registry.register(driver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::signal::Signal;
    use heapless::Vec;
    use tessera_core::{Area, Color, PanelConfig, RedrawRequest, SharedRegistry};
    use tessera_hal::{Dimensions, RawColor};

    #[derive(Default)]
    struct MockLcd {
        pixels: usize,
        rects: Vec<(u16, u16, u16, u16, RawColor), 8>,
    }

    impl LcdController for MockLcd {
        fn draw_pixel(&mut self, _x: u16, _y: u16, _color: RawColor) {
            self.pixels += 1;
        }

        fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: RawColor) {
            self.rects.push((x, y, width, height, color)).ok();
        }

        fn dimensions(&self) -> Dimensions {
            Dimensions::new(800, 480)
        }
    }

    #[test]
    fn test_register_panel_end_to_end() {
        let ready: Signal<CriticalSectionRawMutex, ()> = Signal::new();
        let panel = PanelDriver::new(MockLcd::default(), PanelConfig::default())
            .with_flush_ready(&ready);
        let mut registry: DisplayRegistry<RedrawRequest> =
            DisplayRegistry::new(RedrawRequest::new());

        let handle = register_panel(&mut registry, &panel).unwrap();
        assert_eq!(registry.get_active(), Some(handle));
        assert!(registry.engine_mut().take());

        registry.fill(Area::new(900, 0, 950, 10), Color::RED);
        registry.fill(Area::new(-5, -5, 10, 10), Color::RED);
        registry.flush(Area::new(0, 0, 1, 1), &[Color::BLUE; 4]);

        assert!(ready.try_take().is_some());
        panel.with_lcd(|lcd| {
            assert_eq!(lcd.rects.as_slice(), &[(0, 0, 11, 11, 0xFFFF_0000)]);
            assert_eq!(lcd.pixels, 4);
        });
    }

    #[test]
    fn test_flush_through_registry_reaches_engine() {
        // The draw loop only holds the registry and the signal it waits on
        let frame_done: Signal<CriticalSectionRawMutex, ()> = Signal::new();
        let main = PanelDriver::new(MockLcd::default(), PanelConfig::default())
            .with_flush_ready(&frame_done);
        let aux = PanelDriver::new(MockLcd::default(), PanelConfig::default())
            .with_flush_ready(&frame_done);
        let mut registry: DisplayRegistry = DisplayRegistry::default();
        register_panel(&mut registry, &main).unwrap();
        let aux_handle = register_panel(&mut registry, &aux).unwrap();

        let frame = [Color::GREEN; 4];
        registry.flush(Area::new(0, 0, 1, 1), &frame);
        assert!(frame_done.try_take().is_some());

        registry.set_active(aux_handle).unwrap();
        registry.flush(Area::new(-10, -10, -5, -5), &frame);
        assert!(frame_done.try_take().is_some());
        assert!(frame_done.try_take().is_none());
    }

    #[test]
    fn test_panel_in_shared_registry() {
        let panel = PanelDriver::new(MockLcd::default(), PanelConfig::default());
        let registry: SharedRegistry<CriticalSectionRawMutex> = SharedRegistry::new(());
        registry.register(panel_descriptor(&panel)).unwrap();

        std::thread::scope(|s| {
            s.spawn(|| registry.fill(Area::new(0, 0, 3, 3), Color::BLUE));
        });

        assert_eq!(
            panel.with_lcd(|lcd| lcd.rects.clone()).as_slice(),
            &[(0, 0, 4, 4, 0xFF00_00FF)]
        );
    }

    #[test]
    fn test_second_panel_stays_inactive() {
        let main = PanelDriver::new(MockLcd::default(), PanelConfig::default());
        let aux = PanelDriver::new(MockLcd::default(), PanelConfig::default());
        let mut registry: DisplayRegistry = DisplayRegistry::default();

        let main_handle = register_panel(&mut registry, &main).unwrap();
        let aux_handle = register_panel(&mut registry, &aux).unwrap();

        assert_eq!(registry.get_active(), Some(main_handle));
        assert_eq!(registry.next(None), Some(aux_handle));

        registry.fill(Area::new(0, 0, 0, 0), Color::WHITE);
        assert_eq!(main.with_lcd(|lcd| lcd.rects.len()), 1);
        assert_eq!(aux.with_lcd(|lcd| lcd.rects.len()), 0);
    }

    #[cfg(feature = "gpu")]
    #[test]
    fn test_register_with_gpu() {
        use crate::gpu::SoftGpu;

        let panel = PanelDriver::new(MockLcd::default(), PanelConfig::default());
        let gpu = SoftGpu;
        let mut registry: DisplayRegistry = DisplayRegistry::default();

        register_panel_with_gpu(&mut registry, &panel, &gpu).unwrap();

        assert_eq!(registry.supports_mem_blend(), Ok(true));
        assert_eq!(registry.supports_mem_fill(), Ok(true));

        let mut dest = [Color::BLACK; 3];
        registry.mem_fill(&mut dest, Color::GREEN);
        assert_eq!(dest, [Color::GREEN; 3]);
    }

    #[test]
    fn test_panel_only_has_no_gpu() {
        let panel = PanelDriver::new(MockLcd::default(), PanelConfig::default());
        let desc = panel_descriptor(&panel);
        assert!(desc.fill.is_some() && desc.map.is_some() && desc.flush.is_some());

        #[cfg(feature = "gpu")]
        assert!(desc.mem_blend.is_none() && desc.mem_fill.is_none());
    }
}
