use crate::screen::{DisplayError, Platform, ScreenSize, ScreenSizeProvider};

/// Provider for targets without a display backend. Always fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedScreen;

impl ScreenSizeProvider for UnsupportedScreen {
    fn screen_size(&self) -> Result<ScreenSize, DisplayError> {
        Err(DisplayError::UnsupportedPlatform)
    }

    fn platform(&self) -> Platform {
        Platform::Unsupported
    }
}
