//! Character display contract and shared components for the reflow front panel
//!
//! This crate provides:
//! - `CharacterDisplay` trait for character-cell displays (HD44780 and friends)
//! - `TextGrid`, an in-memory 16x2 grid implementing that trait
//!
//! # Architecture
//!
//! The front panel logic in `reflow-core` only ever talks to a
//! `CharacterDisplay`. On the target this is the HD44780 driver from
//! `reflow-drivers`; on the host it is a `TextGrid`, which records exactly
//! what the panel would have shown.

#![no_std]

pub mod backend;
pub mod grid;

// Re-export key types
pub use backend::{CharacterDisplay, DisplayError};
pub use grid::{TextGrid, GRID_COLS, GRID_ROWS};
