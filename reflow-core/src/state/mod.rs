//! Front panel state machine
//!
//! Defines the authoritative mode of the panel.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;
pub mod step;

pub use events::Event;
pub use machine::{MenuEntry, Mode};
pub use step::EditStep;
