//! Position inside the sequential parameter editor

use crate::config::{ProfileField, FIELD_COUNT};

/// Index of the field currently being edited
///
/// Always addresses a valid entry of [`ProfileField::ALL`]; stepping past
/// the last field yields `None`, which closes editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EditStep(u8);

impl EditStep {
    /// First step of an edit session
    pub const FIRST: EditStep = EditStep(0);

    /// Step for a given index, if in range
    pub fn new(index: usize) -> Option<Self> {
        (index < FIELD_COUNT).then_some(EditStep(index as u8))
    }

    /// Zero-based index
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Field addressed by this step
    pub fn field(self) -> ProfileField {
        ProfileField::ALL[self.index()]
    }

    /// Following step, or `None` past the last field
    pub fn next(self) -> Option<Self> {
        Self::new(self.index() + 1)
    }
}
