//! Operator input
//!
//! The push-button arrives through a [`DebounceGate`] shared with interrupt
//! context; the knob arrives through a [`PositionTracker`] owned by the
//! main loop.

pub mod debounce;
pub mod position;

pub use debounce::DebounceGate;
pub use position::PositionTracker;
