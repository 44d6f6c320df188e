mod display;

pub use crate::macos::display::MacScreen;
