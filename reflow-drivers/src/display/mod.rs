//! Character display drivers

mod hd44780;

pub use hd44780::{Hd44780, DEFAULT_ADDRESS};
