//! Front panel timing and encoder configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw quadrature counts per mechanical detent
pub const PULSES_PER_DETENT: i32 = 4;

/// Minimum interval between accepted button edges
pub const BUTTON_DEBOUNCE_MS: u32 = 300;

/// Length of the placeholder pause in the Running state
pub const RUN_PAUSE_MS: u32 = 100;

/// Main loop period
pub const LOOP_PERIOD_MS: u32 = 5;

/// Front panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrontPanelConfig {
    /// Raw encoder counts per detent (4 for x4 decoding)
    pub pulses_per_detent: i32,
    /// Button debounce window (ms)
    pub debounce_ms: u32,
    /// Bounded pause spent in Running before returning to the menu (ms)
    pub run_pause_ms: u32,
    /// Main loop polling period (ms)
    pub loop_period_ms: u32,
}

impl Default for FrontPanelConfig {
    fn default() -> Self {
        Self {
            pulses_per_detent: PULSES_PER_DETENT,
            debounce_ms: BUTTON_DEBOUNCE_MS,
            run_pause_ms: RUN_PAUSE_MS,
            loop_period_ms: LOOP_PERIOD_MS,
        }
    }
}
