//! Panel configuration
//!
//! Constants are generated by build.rs from panel.toml, which is validated
//! at build time. Edit panel.toml and rebuild to customize.

use reflow_core::config::{FrontPanelConfig, RampRates, ReflowProfile};

include!(concat!(env!("OUT_DIR"), "/panel_config.rs"));

/// LCD I2C bus frequency
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Panel timing from panel.toml
pub const PANEL: FrontPanelConfig = FrontPanelConfig {
    pulses_per_detent: PULSES_PER_DETENT,
    debounce_ms: DEBOUNCE_MS,
    run_pause_ms: RUN_PAUSE_MS,
    loop_period_ms: LOOP_PERIOD_MS,
};

/// Start-up profile from panel.toml
pub fn startup_profile() -> ReflowProfile {
    ReflowProfile {
        soak_temp_c: SOAK_TEMP_C,
        soak_time_s: SOAK_TIME_S,
        reflow_temp_c: REFLOW_TEMP_C,
        reflow_time_s: REFLOW_TIME_S,
        soak_end_temp_c: SOAK_END_TEMP_C,
        ramps: RampRates {
            preheat: RAMP_PREHEAT,
            soak: RAMP_SOAK,
            reflow: RAMP_REFLOW,
            cool_down: RAMP_COOL_DOWN,
        },
    }
}
