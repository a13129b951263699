//! Board-agnostic front panel logic for the reflow oven controller
//!
//! This crate contains all panel logic that does not depend on
//! specific hardware implementations:
//!
//! - Debounced button-edge capture shared with interrupt context
//! - Encoder position tracking with clamping and seeding
//! - Mode state machine (select / edit / run)
//! - Sequential reflow-profile parameter editor
//! - Presentation of panel state onto a 16x2 character grid
//! - Configuration and profile type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod editor;
pub mod input;
pub mod panel;
pub mod state;
pub mod traits;
pub mod ui;

pub use panel::{FrontPanel, PanelUpdate};
