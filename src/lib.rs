//! Query the pixel size of the primary display.
//!
//! ```no_run
//! match screensize::get_screen_size() {
//!     Ok(size) => println!("{}x{}", size.width, size.height),
//!     Err(error) => eprintln!("{error}"),
//! }
//! ```
//!
//! The backend is picked at build time: `GetSystemMetrics` on Windows,
//! CoreGraphics on MacOS, and X11 (RandR primary output) on Linux. Any other
//! target compiles, but every query fails with
//! [`DisplayError::UnsupportedPlatform`].
//!
//! With the `serialize` feature [`ScreenSize`] serializes as a record with
//! exactly two fields, `width` and `height`.

mod screen;
pub use crate::screen::{DisplayError, Platform, ScreenSize, ScreenSizeProvider};

pub mod ffi;

mod unsupported;
pub use crate::unsupported::UnsupportedScreen;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use crate::macos::MacScreen;
#[cfg(target_os = "macos")]
pub type NativeScreen = MacScreen;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use crate::linux::X11Screen;
#[cfg(target_os = "linux")]
pub type NativeScreen = X11Screen;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use crate::windows::WindowsScreen;
#[cfg(target_os = "windows")]
pub type NativeScreen = WindowsScreen;

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
pub type NativeScreen = UnsupportedScreen;

/// The provider for the platform this crate was built for.
pub fn default_provider() -> NativeScreen {
    NativeScreen::default()
}

/// Returns the primary display size in device pixels.
///
/// Every call asks the operating system again, so a changed display mode is
/// picked up on the next call.
pub fn get_screen_size() -> Result<ScreenSize, DisplayError> {
    let provider = default_provider();
    let result = provider.screen_size();
    match &result {
        Ok(size) => tracing::trace!(platform = %provider.platform(), %size, "screen size"),
        Err(error) => tracing::trace!(platform = %provider.platform(), %error, "screen size"),
    }
    result
}
