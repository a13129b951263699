//! Events that trigger mode transitions

use super::machine::MenuEntry;

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Debounced button press
    Confirm,
    /// Knob moved the menu highlight
    Highlight(MenuEntry),
    /// Running finished its work
    RunComplete,
}
