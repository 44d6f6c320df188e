mod display;

pub use crate::linux::display::X11Screen;
