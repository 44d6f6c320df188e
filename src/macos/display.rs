use crate::screen::{DisplayError, Platform, ScreenSize, ScreenSizeProvider};
use objc2_core_graphics::{CGDisplayPixelsHigh, CGDisplayPixelsWide, CGMainDisplayID};

/// Primary display metrics from CoreGraphics.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacScreen;

impl ScreenSizeProvider for MacScreen {
    fn screen_size(&self) -> Result<ScreenSize, DisplayError> {
        // CGMainDisplayID is the display holding the menu bar. The pixel
        // counts are device pixels of its current mode.
        let display_id = CGMainDisplayID();
        let width = CGDisplayPixelsWide(display_id);
        let height = CGDisplayPixelsHigh(display_id);
        Ok(ScreenSize::from_native(width, height))
    }

    fn platform(&self) -> Platform {
        Platform::MacOS
    }
}
