//! Configuration types
//!
//! Compile-time defaults and the reflow profile the operator edits.

pub mod panel;
pub mod types;

pub use panel::*;
pub use types::*;
