mod display;

pub use crate::windows::display::WindowsScreen;
