//! Push-button edge capture
//!
//! Active-low button with internal pull-up. Every falling edge is offered
//! to the debounce gate; the main loop consumes accepted presses.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use crate::channels::BUTTON;

/// Button task - timestamps falling edges into the debounce gate
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;

        let now_ms = Instant::now().as_millis() as u32;
        if BUTTON.on_edge(now_ms) {
            debug!("Button press accepted at {} ms", now_ms);
        } else {
            trace!("Button edge ignored (bounce)");
        }
    }
}
