pub mod length_window;

pub use length_window::LengthWindow;
