#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::ffi::CStr;
use std::fmt;
use strum_macros::{Display as StrumDisplay, EnumIter, IntoStaticStr};
use thiserror::Error;

/// Message of [`DisplayError::UnsupportedPlatform`], NUL-terminated for the C ABI.
pub(crate) const UNSUPPORTED_PLATFORM_MESSAGE: &CStr =
    c"screen size query is not implemented on this platform";

/// Errors returned by a screen size query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum DisplayError {
    /// No backend exists for the platform this crate was built for.
    #[error("{}", UNSUPPORTED_PLATFORM_MESSAGE.to_string_lossy())]
    UnsupportedPlatform,
    /// The platform is supported but no display server could be reached,
    /// e.g. a headless Linux session without `DISPLAY`.
    #[error("no display available: {0}")]
    NoDisplay(String),
}

/// Pixel extents of a display device.
///
/// A fresh value is produced by every query; nothing here is cached.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub const fn new(width: u32, height: u32) -> ScreenSize {
        ScreenSize { width, height }
    }

    /// Builds a size from whatever integer type a native API reports.
    ///
    /// Negative extents clamp to zero, oversized ones saturate at `u32::MAX`.
    pub fn from_native<T>(width: T, height: T) -> ScreenSize
    where
        T: TryInto<u32> + PartialOrd + Default + Copy + fmt::Debug,
    {
        if width < T::default() || height < T::default() {
            tracing::warn!(?width, ?height, "native display metrics were negative, clamping");
        }
        ScreenSize {
            width: clamp_extent(width),
            height: clamp_extent(height),
        }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// True when either extent is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

fn clamp_extent<T>(value: T) -> u32
where
    T: TryInto<u32> + PartialOrd + Default + Copy,
{
    if value < T::default() {
        0
    } else {
        value.try_into().unwrap_or(u32::MAX)
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for ScreenSize {
    fn from((width, height): (u32, u32)) -> Self {
        ScreenSize { width, height }
    }
}

impl From<ScreenSize> for (u32, u32) {
    fn from(size: ScreenSize) -> Self {
        (size.width, size.height)
    }
}

/// Display backend compiled into this build.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, StrumDisplay, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Platform {
    #[strum(to_string = "Windows")]
    Windows,
    #[strum(to_string = "macOS")]
    MacOS,
    #[strum(to_string = "Linux (X11)")]
    Linux,
    #[strum(to_string = "unsupported")]
    Unsupported,
}

impl Platform {
    pub fn current() -> Platform {
        crate::default_provider().platform()
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Unsupported)
    }
}

/// A source of primary display metrics.
///
/// Every backend answers with the device resolution of the primary display,
/// never the bounds of a window or of the whole desktop.
pub trait ScreenSizeProvider: Send + Sync {
    fn screen_size(&self) -> Result<ScreenSize, DisplayError>;

    fn platform(&self) -> Platform;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    struct FixedScreen(ScreenSize);

    impl ScreenSizeProvider for FixedScreen {
        fn screen_size(&self) -> Result<ScreenSize, DisplayError> {
            Ok(self.0)
        }

        fn platform(&self) -> Platform {
            Platform::Linux
        }
    }

    #[test]
    fn test_fixed_full_hd() {
        let provider = FixedScreen(ScreenSize::new(1920, 1080));
        assert_eq!(
            provider.screen_size(),
            Ok(ScreenSize {
                width: 1920,
                height: 1080
            })
        );
    }

    #[test]
    fn test_fixed_uhd_through_trait_object() {
        let provider: Box<dyn ScreenSizeProvider> =
            Box::new(FixedScreen(ScreenSize::new(3840, 2160)));
        let size = provider.screen_size().unwrap();
        assert_eq!((size.width, size.height), (3840, 2160));
        assert_eq!(size.area(), 3840 * 2160);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ScreenSize::new(2560, 1600).to_string(), "2560x1600");
    }

    #[test]
    fn test_from_native_clamps_negative() {
        assert_eq!(ScreenSize::from_native(-1, 1080), ScreenSize::new(0, 1080));
        assert_eq!(ScreenSize::from_native(1920, 1080), ScreenSize::new(1920, 1080));
        assert!(ScreenSize::from_native(-5, -5).is_empty());
    }

    #[test]
    fn test_from_native_saturates_unsigned() {
        assert_eq!(
            ScreenSize::from_native(u64::MAX, 1440),
            ScreenSize::new(u32::MAX, 1440)
        );
        assert_eq!(
            ScreenSize::from_native(2560usize, 1600usize),
            ScreenSize::new(2560, 1600)
        );
    }

    #[test]
    fn test_area_does_not_overflow() {
        let size = ScreenSize::new(u32::MAX, u32::MAX);
        assert_eq!(size.area(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_tuple_conversions() {
        let size: ScreenSize = (1280, 720).into();
        let pair: (u32, u32) = size.into();
        assert_eq!(pair, (1280, 720));
    }

    #[test]
    fn test_error_messages() {
        let message = DisplayError::UnsupportedPlatform.to_string();
        assert!(message.contains("screen size"));
        assert!(message.contains("not implemented"));
        assert_eq!(message, UNSUPPORTED_PLATFORM_MESSAGE.to_str().unwrap());
        assert_eq!(
            DisplayError::NoDisplay("DISPLAY is not set".into()).to_string(),
            "no display available: DISPLAY is not set"
        );
    }

    #[test]
    fn test_only_unsupported_is_unsupported() {
        let unsupported: Vec<Platform> = Platform::iter().filter(|p| !p.is_supported()).collect();
        assert_eq!(unsupported, vec![Platform::Unsupported]);
        let name: &'static str = Platform::MacOS.into();
        assert_eq!(name, "macOS");
    }
}
