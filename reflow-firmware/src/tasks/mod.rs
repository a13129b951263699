//! Embassy async tasks
//!
//! Input tasks wake on GPIO edges and publish into the statics in
//! [`crate::channels`].

pub mod button;
pub mod encoder;

pub use button::button_task;
pub use encoder::encoder_task;
