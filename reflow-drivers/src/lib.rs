//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in reflow-core and reflow-display for the front panel hardware:
//!
//! - HD44780 character LCD behind a PCF8574 I2C backpack
//! - Quadrature rotary encoder decoding into a shared count

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod encoder;
