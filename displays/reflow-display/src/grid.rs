//! In-memory text grid
//!
//! A 16x2 cell buffer that behaves like the panel LCD. Used on the host to
//! observe what the panel renders, and as a shadow copy when needed.

use crate::backend::{CharacterDisplay, DisplayError};

/// Number of character rows on the panel display
pub const GRID_ROWS: usize = 2;

/// Number of character columns on the panel display
pub const GRID_COLS: usize = 16;

/// Text-mode cell buffer
#[derive(Clone)]
pub struct TextGrid {
    /// Cell contents, space-filled
    cells: [[u8; GRID_COLS]; GRID_ROWS],
    /// Blinking cursor position (col, row)
    cursor: (u8, u8),
    /// Number of `write_at` calls since creation
    writes: u32,
    /// Number of `clear` calls since creation
    clears: u32,
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGrid {
    /// Create a blank grid
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; GRID_COLS]; GRID_ROWS],
            cursor: (0, 0),
            writes: 0,
            clears: 0,
        }
    }

    /// Get the content of a row, trailing blanks included
    pub fn line(&self, row: usize) -> &str {
        match self.cells.get(row) {
            // Only printable ASCII is ever stored
            Some(cells) => core::str::from_utf8(cells).unwrap_or(""),
            None => "",
        }
    }

    /// Get `len` cells of a row starting at `col`
    pub fn region(&self, col: usize, row: usize, len: usize) -> &str {
        let line = self.line(row);
        let start = col.min(line.len());
        let end = (col + len).min(line.len());
        &line[start..end]
    }

    /// Current cursor position (col, row)
    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    /// Number of text writes performed
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Number of full clears performed
    pub fn clears(&self) -> u32 {
        self.clears
    }
}

impl CharacterDisplay for TextGrid {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.cells = [[b' '; GRID_COLS]; GRID_ROWS];
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        let row = row as usize;
        if row >= GRID_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        if col as usize >= GRID_COLS {
            // Entirely past the right edge
            return Ok(());
        }
        self.writes += 1;

        let mut col = col as usize;
        for byte in text.bytes() {
            if col >= GRID_COLS {
                break;
            }
            self.cells[row][col] = if byte.is_ascii_graphic() || byte == b' ' {
                byte
            } else {
                b'?'
            };
            col += 1;
        }
        // The hardware cursor follows the last written cell
        self.cursor = (col.min(GRID_COLS) as u8, row as u8);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if col as usize >= GRID_COLS || row as usize >= GRID_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (col, row);
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (GRID_COLS as u8, GRID_ROWS as u8)
    }
}
