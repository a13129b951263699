//! Temperature sensor fault reporting

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Thermocouple fault reported by the temperature front end
///
/// Decoding these from the sensor's fault bits belongs to the sensor
/// driver; the panel only consults whether one is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorFault {
    /// Thermocouple disconnected (open circuit)
    OpenCircuit,
    /// Thermocouple shorted to ground
    ShortToGround,
    /// Thermocouple shorted to supply
    ShortToVcc,
}
