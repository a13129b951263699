//! HD44780 Character LCD Driver
//!
//! Driver for 16x2 HD44780-compatible LCDs behind a PCF8574 I2C backpack.
//! The controller runs in 4-bit mode; each byte goes out as two nibbles
//! strobed on the enable line.
//!
//! Backpack wiring (PCF8574 port bits):
//!
//! ```text
//! P0 RS   P1 RW   P2 EN   P3 backlight   P4..P7 D4..D7
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use reflow_display::{CharacterDisplay, DisplayError};

/// Common backpack address (PCF8574 with A0..A2 high)
pub const DEFAULT_ADDRESS: u8 = 0x27;

const COLS: u8 = 16;
const ROWS: u8 = 2;

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; ROWS as usize] = [0x00, 0x40];

/// PCF8574 port bits
mod pin {
    pub const RS: u8 = 0x01;
    pub const EN: u8 = 0x04;
    pub const BACKLIGHT: u8 = 0x08;
}

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    /// Increment address, no shift
    pub const ENTRY_MODE: u8 = 0x06;
    /// Display on, cursor off, blink on
    pub const DISPLAY_ON_BLINK: u8 = 0x0D;
    /// 4-bit bus, two lines, 5x8 font
    pub const FUNCTION_SET: u8 = 0x28;
    pub const SET_DDRAM: u8 = 0x80;
}

/// HD44780 LCD driver
pub struct Hd44780<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    initialized: bool,
}

impl<I2C, D> Hd44780<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a new driver; call [`init`](Self::init) before use
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            initialized: false,
        }
    }

    /// Initialize the controller into 4-bit two-line mode
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Power-on settle
        self.delay.delay_ms(50);

        // Force 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x30, 0)?;
        self.delay.delay_us(150);
        self.write_nibble(0x20, 0)?;

        self.command(cmd::FUNCTION_SET)?;
        self.command(cmd::DISPLAY_ON_BLINK)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        self.command(cmd::ENTRY_MODE)?;

        self.initialized = true;
        Ok(())
    }

    fn ensure_ready(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    fn check_row(row: u8) -> Result<(), DisplayError> {
        if row < ROWS {
            Ok(())
        } else {
            Err(DisplayError::InvalidCoordinates)
        }
    }

    /// Strobe the high nibble of `nibble` with the given RS state
    fn write_nibble(&mut self, nibble: u8, mode: u8) -> Result<(), DisplayError> {
        let data = (nibble & 0xF0) | mode | pin::BACKLIGHT;
        self.i2c
            .write(self.address, &[data | pin::EN, data])
            .map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn send(&mut self, byte: u8, mode: u8) -> Result<(), DisplayError> {
        self.write_nibble(byte & 0xF0, mode)?;
        self.write_nibble(byte << 4, mode)
    }

    fn command(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.send(byte, 0)
    }

    fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.send(byte, pin::RS)
    }

    fn move_to(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.command(cmd::SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }
}

impl<I2C, D> CharacterDisplay for Hd44780<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn write_at(&mut self, col: u8, row: u8, text: &str) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        Self::check_row(row)?;
        if col >= COLS {
            // Entirely past the right edge
            return Ok(());
        }
        self.move_to(col, row)?;

        let room = (COLS - col) as usize;
        for byte in text.bytes().take(room) {
            // The character ROM only matches ASCII
            let byte = if byte.is_ascii() && !byte.is_ascii_control() {
                byte
            } else {
                b'?'
            };
            self.data(byte)?;
        }
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        Self::check_row(row)?;
        if col >= COLS {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.move_to(col, row)
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS, ROWS)
    }
}
