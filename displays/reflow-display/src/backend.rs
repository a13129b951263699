//! Character display trait
//!
//! Defines the write contract every text display on the panel must honour.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Row or column outside the grid
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Character-cell display addressed by (column, row)
///
/// Cells hold single ASCII characters. Text written past the right edge
/// of a row is dropped; it never wraps onto the next row. A write that
/// starts past the right edge writes nothing and succeeds. Rows outside
/// the grid, and cursor cells outside it, are `InvalidCoordinates`.
pub trait CharacterDisplay {
    /// Clear every cell and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at the given cell
    ///
    /// - `col`: Column number (0-based)
    /// - `row`: Row number (0-based)
    /// - `text`: ASCII text to display
    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError>;

    /// Park the blinking cursor on a cell (selection highlight)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}

impl<T: CharacterDisplay + ?Sized> CharacterDisplay for &mut T {
    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        (**self).write_at(col, row, text)
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        (**self).set_cursor(col, row)
    }

    fn dimensions(&self) -> (u8, u8) {
        (**self).dimensions()
    }
}
