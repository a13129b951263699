//! State shared between interrupt-driven tasks and the main loop
//!
//! Both are lock-free atomics with a single writer: the input tasks write,
//! the main loop reads.

use reflow_core::input::DebounceGate;
use reflow_drivers::encoder::SharedCount;

use crate::config::PANEL;

/// Debounced button press, set by the button task
pub static BUTTON: DebounceGate = DebounceGate::new(PANEL.debounce_ms);

/// Raw encoder count, accumulated by the encoder task
///
/// The main loop also writes it to clamp and seed the knob.
pub static ENCODER_COUNT: SharedCount = SharedCount::new();
