//! Rotary encoder task
//!
//! Wakes on any edge of either channel and feeds the quadrature decoder.

use defmt::*;
use embassy_futures::select::select;
use embassy_rp::gpio::Input;

use reflow_drivers::encoder::QuadratureDecoder;

use crate::channels::ENCODER_COUNT;

/// Encoder task - accumulates quadrature steps into the shared count
#[embassy_executor::task]
pub async fn encoder_task(mut a: Input<'static>, mut b: Input<'static>) {
    info!("Encoder task started");

    let mut decoder = QuadratureDecoder::new(a.is_high(), b.is_high());

    loop {
        select(a.wait_for_any_edge(), b.wait_for_any_edge()).await;
        ENCODER_COUNT.add(decoder.update(a.is_high(), b.is_high()));
    }
}
