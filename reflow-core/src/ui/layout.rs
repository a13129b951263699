//! Fixed screen coordinates
//!
//! ```text
//!   0123456789012345
//!  +----------------+
//! 0|S:150 R:225 T:40|   summary
//! 1|Run:   Edit:    |   cursor blinks at col 4 (Run) or col 12 (Edit)
//!  +----------------+
//!
//!  +----------------+
//! 0|Soak Temp:150 C |   edit step
//! 1|Field 1/4       |
//!  +----------------+
//! ```

use crate::config::{ProfileField, FIELD_WIDTH};
use crate::state::MenuEntry;

/// A value slot on screen: (col, row, width)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub col: u8,
    pub row: u8,
    pub width: u8,
}

impl Slot {
    const fn new(col: u8, row: u8, width: u8) -> Self {
        Self { col, row, width }
    }
}

/// Summary screen tags: (text, col, row)
pub const SUMMARY_TAGS: [(&str, u8, u8); 5] = [
    ("S:", 0, 0),
    ("R:", 6, 0),
    ("T:", 12, 0),
    ("Run:", 0, 1),
    ("Edit:", 7, 1),
];

/// Summary screen value slots, by field (soak time is not shown)
pub const fn summary_slot(field: ProfileField) -> Option<Slot> {
    match field {
        ProfileField::SoakTemp => Some(Slot::new(2, 0, FIELD_WIDTH)),
        ProfileField::ReflowTemp => Some(Slot::new(8, 0, FIELD_WIDTH)),
        ProfileField::ReflowTime => Some(Slot::new(14, 0, 2)),
        ProfileField::SoakTime => None,
    }
}

/// Cursor cell marking a menu entry
pub const fn menu_cursor(entry: MenuEntry) -> (u8, u8) {
    match entry {
        MenuEntry::Run => (4, 1),
        MenuEntry::Edit => (12, 1),
    }
}

/// Row of the edit label and value
pub const EDIT_ROW: u8 = 0;

/// Column of the edited value
pub const EDIT_VALUE_COL: u8 = 10;

/// Column of the unit suffix
pub const EDIT_UNIT_COL: u8 = 14;

/// Edited value slot
pub const EDIT_VALUE: Slot = Slot::new(EDIT_VALUE_COL, EDIT_ROW, FIELD_WIDTH);

/// Row of the step indicator
pub const EDIT_PROGRESS_ROW: u8 = 1;
