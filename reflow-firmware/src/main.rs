//! Reflow Oven Front Panel Firmware
//!
//! Main firmware binary for the RP2040-based reflow oven controller.
//! Drives the operator panel: rotary encoder, push-button and a 16x2
//! character LCD for selecting a run or editing the reflow profile.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Delay, Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use reflow_core::traits::SensorFault;
use reflow_core::{FrontPanel, PanelUpdate};
use reflow_drivers::display::{Hd44780, DEFAULT_ADDRESS};

use crate::channels::{BUTTON, ENCODER_COUNT};

mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Reflow panel firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let panel_config = config::PANEL;
    let profile = config::startup_profile();
    info!(
        "Panel config: {} pulses/detent, debounce {}ms, loop {}ms",
        panel_config.pulses_per_detent,
        BUTTON.window_ms(),
        panel_config.loop_period_ms
    );

    // LCD on I2C0 (GP0 = SDA, GP1 = SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config::I2C_FREQUENCY_HZ;
    let bus = I2c::new_blocking(p.I2C0, p.PIN_1, p.PIN_0, i2c_config);

    let mut lcd = Hd44780::new(bus, Delay, DEFAULT_ADDRESS);
    match lcd.init() {
        Ok(()) => info!("LCD initialized"),
        Err(e) => warn!("LCD init failed: {}", e),
    }

    // Encoder on GP2/GP3, button on GP4, all active-low
    let enc_a = Input::new(p.PIN_2, Pull::Up);
    let enc_b = Input::new(p.PIN_3, Pull::Up);
    let button = Input::new(p.PIN_4, Pull::Up);

    spawner.spawn(tasks::encoder_task(enc_a, enc_b)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();

    let mut panel = FrontPanel::new(&ENCODER_COUNT, lcd, Delay, profile, panel_config);
    panel.start();
    info!("Mode: {}", panel.mode());

    let mut ticker = Ticker::every(Duration::from_millis(panel_config.loop_period_ms as u64));

    loop {
        let update = panel.poll(BUTTON.poll_and_clear());

        if !update.is_idle() {
            log_update(&update, panel.fault());
        }
        if let Some(e) = panel.take_display_error() {
            warn!("Display error: {}", e);
        }

        ticker.next().await;
    }
}

fn log_update(update: &PanelUpdate, fault: Option<SensorFault>) {
    if let Some(entry) = update.highlighted {
        debug!("Highlight: {}", entry);
    }
    if let Some(edit) = update.edited {
        debug!("Edit: {} = {}", edit.field, edit.value);
    }
    if let Some(mode) = update.entered {
        match mode.edit_step() {
            Some(step) => info!("Mode: {}, editing {}", mode, step.field()),
            None => info!("Mode: {}", mode),
        }
        if mode.is_running() {
            if let Some(fault) = fault {
                warn!("Sensor fault {}, run skipped", fault);
            }
        }
    }
}
