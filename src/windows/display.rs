use crate::screen::{DisplayError, Platform, ScreenSize, ScreenSizeProvider};
use winapi::um::winuser::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

/// Primary display metrics from `GetSystemMetrics`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsScreen;

impl ScreenSizeProvider for WindowsScreen {
    fn screen_size(&self) -> Result<ScreenSize, DisplayError> {
        // SM_CXSCREEN/SM_CYSCREEN describe the primary monitor only, unlike
        // the SM_*VIRTUALSCREEN metrics which span every monitor.
        let (cx, cy) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        Ok(ScreenSize::from_native(cx, cy))
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }
}
