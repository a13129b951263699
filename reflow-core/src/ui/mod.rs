//! Screen presentation
//!
//! Projects panel state onto the 16x2 character grid. Nothing in here
//! decides behavior; it only turns state into grid writes.

pub mod layout;
pub mod presenter;

pub use presenter::Presenter;
