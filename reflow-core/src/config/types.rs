//! Reflow profile type definitions
//!
//! The profile lives in RAM for the session only. Only the four fields in
//! [`ProfileField::ALL`] are operator-editable; the remaining targets are
//! carried for the thermal controller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width in characters of an edited value on the display
pub const FIELD_WIDTH: u8 = 3;

/// Number of editable profile fields
pub const FIELD_COUNT: usize = 4;

/// Editable profile field, in edit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProfileField {
    /// Soak plateau temperature (°C)
    SoakTemp,
    /// Soak duration (s)
    SoakTime,
    /// Peak reflow temperature (°C)
    ReflowTemp,
    /// Time held at reflow (s)
    ReflowTime,
}

/// Static description of an editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldSpec {
    /// Label shown on the edit screen (10 chars)
    pub label: &'static str,
    /// Unit suffix shown after the value
    pub unit: &'static str,
    /// Smallest allowed value
    pub min: u16,
    /// Largest allowed value
    pub max: u16,
}

impl ProfileField {
    /// All editable fields in edit order
    pub const ALL: [ProfileField; FIELD_COUNT] = [
        ProfileField::SoakTemp,
        ProfileField::SoakTime,
        ProfileField::ReflowTemp,
        ProfileField::ReflowTime,
    ];

    /// Field metadata
    pub const fn spec(self) -> FieldSpec {
        match self {
            ProfileField::SoakTemp => FieldSpec {
                label: "Soak Temp:",
                unit: "C",
                min: 0,
                max: 300,
            },
            ProfileField::SoakTime => FieldSpec {
                label: "Soak Time:",
                unit: "s",
                min: 0,
                max: 999,
            },
            ProfileField::ReflowTemp => FieldSpec {
                label: "Refl Temp:",
                unit: "C",
                min: 0,
                max: 300,
            },
            // Two columns on the summary screen
            ProfileField::ReflowTime => FieldSpec {
                label: "Refl Time:",
                unit: "s",
                min: 0,
                max: 99,
            },
        }
    }
}

/// Temperature ramp rates (°C/s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RampRates {
    /// Room temperature to soak
    pub preheat: i8,
    /// Across the soak plateau (0 = flat soak)
    pub soak: i8,
    /// Soak end to reflow peak
    pub reflow: i8,
    /// Cool-down after reflow (negative)
    pub cool_down: i8,
}

impl Default for RampRates {
    fn default() -> Self {
        Self {
            preheat: 3,
            soak: 0,
            reflow: 2,
            cool_down: -4,
        }
    }
}

/// Reflow profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReflowProfile {
    /// Soak plateau temperature (°C)
    pub soak_temp_c: u16,
    /// Soak duration (s)
    pub soak_time_s: u16,
    /// Peak reflow temperature (°C)
    pub reflow_temp_c: u16,
    /// Time held at reflow (s)
    pub reflow_time_s: u16,
    /// Temperature at the end of the soak plateau (°C)
    pub soak_end_temp_c: u16,
    /// Ramp rates between phases
    pub ramps: RampRates,
}

impl Default for ReflowProfile {
    fn default() -> Self {
        Self {
            soak_temp_c: 150,
            soak_time_s: 60,
            reflow_temp_c: 225,
            reflow_time_s: 40,
            soak_end_temp_c: 180,
            ramps: RampRates::default(),
        }
    }
}

impl ReflowProfile {
    /// Read an editable field
    pub fn get(&self, field: ProfileField) -> u16 {
        match field {
            ProfileField::SoakTemp => self.soak_temp_c,
            ProfileField::SoakTime => self.soak_time_s,
            ProfileField::ReflowTemp => self.reflow_temp_c,
            ProfileField::ReflowTime => self.reflow_time_s,
        }
    }

    /// Write an editable field, clamped into its bounds
    ///
    /// Returns the value actually stored.
    pub fn set(&mut self, field: ProfileField, value: u16) -> u16 {
        let spec = field.spec();
        let value = value.clamp(spec.min, spec.max);
        let slot = match field {
            ProfileField::SoakTemp => &mut self.soak_temp_c,
            ProfileField::SoakTime => &mut self.soak_time_s,
            ProfileField::ReflowTemp => &mut self.reflow_temp_c,
            ProfileField::ReflowTime => &mut self.reflow_time_s,
        };
        *slot = value;
        value
    }
}
