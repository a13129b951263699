//! Rotary encoder drivers

mod quadrature;

pub use quadrature::{QuadratureDecoder, SharedCount};
