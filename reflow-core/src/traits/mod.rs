//! Hardware abstraction traits
//!
//! These traits define the interface between the panel logic and
//! hardware-specific implementations.

pub mod encoder;
pub mod sensor;

pub use encoder::QuadratureCounter;
pub use sensor::SensorFault;
