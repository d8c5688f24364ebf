//! HD44780 16x2 character LCD in 4-bit mode behind a 74HC595
//!
//! The register's outputs carry RS, RW, EN and D4-D7, so every nibble costs two
//! register writes: one with EN high and one with EN low. The controller
//! samples on the falling edge of EN.
//!
//! There is no busy-flag read-back through the register, so the driver relies
//! on fixed waits from [`LcdTiming`].

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use modular_bitfield::prelude::*;
use static_assertions::const_assert_eq;

use super::shift_register::ShiftRegister;
use super::Error;

/// HD44780 command bytes used by the driver
pub mod command {
    /// Clear display and return cursor home
    pub const CLEAR: u8 = 0x01;
    /// Return cursor home
    pub const HOME: u8 = 0x02;
    /// Entry mode: increment address, no display shift
    pub const ENTRY_INCREMENT: u8 = 0x06;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON_CURSOR_OFF: u8 = 0x0C;
    /// Function set: 8-bit interface (wake-up sequence only)
    pub const WAKE: u8 = 0x30;
    /// Function set: 4-bit interface
    pub const FOUR_BIT_INTERFACE: u8 = 0x20;
    /// Function set: 4-bit interface, 2 lines, 5x7 font
    pub const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
    /// Set DDRAM address to the start of line 1
    pub const LINE1: u8 = 0x80;
    /// Set DDRAM address to the start of line 2
    pub const LINE2: u8 = 0xC0;
}

/// Visible columns per line
pub const COLUMNS: u8 = 16;
/// Lines on the display
pub const ROWS: u8 = 2;
/// DDRAM columns per line, including the off-screen part
const DDRAM_COLUMNS: u8 = 40;

/// Reorder a byte to match the 74HC595 to LCD wiring.
///
/// Swaps bits 0<->3 and 1<->2 within each nibble. Applying it twice gives the
/// original byte back.
pub const fn remap(byte: u8) -> u8 {
    ((byte & 0x11) << 3) | ((byte & 0x22) << 1) | ((byte & 0x44) >> 1) | ((byte & 0x88) >> 3)
}

/// Byte presented on the register outputs
#[bitfield(bits = 8)]
#[derive(Clone, Copy, Eq, PartialEq)]
struct ControlByte {
    nibble: B4,
    #[skip]
    __: B1,
    en: bool,
    rw: bool,
    rs: bool,
}

const_assert_eq!(core::mem::size_of::<ControlByte>(), 1);

/// Register select
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Register {
    Instruction,
    Data,
}

/// Waits used during and after initialization, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcdTiming {
    /// Wait after power-on before the first write. Must be at least 15ms.
    pub power_on_ms: u32,
    /// Wait after each step of the init sequence
    pub settle_ms: u32,
}

impl Default for LcdTiming {
    fn default() -> Self {
        LcdTiming {
            power_on_ms: 20,
            settle_ms: 5,
        }
    }
}

/// 16x2 character LCD driven through a shift register
pub struct Lcd<DATA, CLK, LATCH, D> {
    register: ShiftRegister<DATA, CLK, LATCH>,
    delay: D,
    timing: LcdTiming,
    control: ControlByte,
}

impl<DATA, CLK, LATCH, D, E> Lcd<DATA, CLK, LATCH, D>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
    D: DelayMs<u32>,
{
    /// Build the driver. Nothing is sent until [`Lcd::init`].
    pub fn new(register: ShiftRegister<DATA, CLK, LATCH>, delay: D, timing: LcdTiming) -> Self {
        Lcd {
            register,
            delay,
            timing,
            control: ControlByte::new(),
        }
    }

    /// Power-on initialization into 4-bit, 2-line mode, then clear
    pub fn init(&mut self) -> Result<(), Error<E>> {
        self.delay.delay_ms(self.timing.power_on_ms);

        // The controller may be in 8-bit mode or halfway through a 4-bit
        // transfer, so the wake-up function sets go out as single nibbles
        for _ in 0..3 {
            self.write_nibble(remap(command::WAKE) >> 4, Register::Instruction)?;
            self.delay.delay_ms(self.timing.settle_ms);
        }
        self.write_nibble(remap(command::FOUR_BIT_INTERFACE) >> 4, Register::Instruction)?;
        self.delay.delay_ms(self.timing.settle_ms);

        for cmd in [
            command::FUNCTION_SET_4BIT_2LINE,
            command::DISPLAY_ON_CURSOR_OFF,
            command::ENTRY_INCREMENT,
            command::CLEAR,
        ] {
            self.command(cmd)?;
            self.delay.delay_ms(self.timing.settle_ms);
        }
        Ok(())
    }

    /// Send an instruction byte
    pub fn command(&mut self, cmd: u8) -> Result<(), Error<E>> {
        self.write_byte(cmd, Register::Instruction)
    }

    /// Write one character code at the cursor
    pub fn put_char(&mut self, c: u8) -> Result<(), Error<E>> {
        self.write_byte(c, Register::Data)
    }

    /// Write character codes until the iterator ends or yields a NUL
    pub fn put_bytes<I>(&mut self, bytes: I) -> Result<(), Error<E>>
    where
        I: IntoIterator<Item = u8>,
    {
        for c in bytes.into_iter().take_while(|&c| c != 0) {
            self.put_char(c)?;
        }
        Ok(())
    }

    /// Write a string's bytes verbatim. No wrapping.
    pub fn put_str(&mut self, s: &str) -> Result<(), Error<E>> {
        self.put_bytes(s.bytes())
    }

    /// Clear the display and home the cursor
    pub fn clear(&mut self) -> Result<(), Error<E>> {
        self.command(command::CLEAR)
    }

    /// Home the cursor
    pub fn home(&mut self) -> Result<(), Error<E>> {
        self.command(command::HOME)
    }

    /// Move the cursor to the start of line 1
    pub fn goto_line1(&mut self) -> Result<(), Error<E>> {
        self.command(command::LINE1)
    }

    /// Move the cursor to the start of line 2
    pub fn goto_line2(&mut self) -> Result<(), Error<E>> {
        self.command(command::LINE2)
    }

    /// Move the cursor to `col` on `row` (both zero-based).
    ///
    /// Columns past the visible 16 are valid DDRAM addresses up to 40.
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error<E>> {
        if row >= ROWS || col >= DDRAM_COLUMNS {
            return Err(Error::CursorOutOfRange);
        }
        self.command(command::LINE1 | (row * 0x40 + col))
    }

    /// Give back the shift register and delay provider
    pub fn release(self) -> (ShiftRegister<DATA, CLK, LATCH>, D) {
        (self.register, self.delay)
    }

    fn write_byte(&mut self, byte: u8, reg: Register) -> Result<(), Error<E>> {
        let byte = remap(byte);
        self.write_nibble(byte >> 4, reg)?;
        self.write_nibble(byte & 0x0F, reg)
    }

    fn write_nibble(&mut self, nibble: u8, reg: Register) -> Result<(), Error<E>> {
        self.control.set_nibble(nibble & 0x0F);
        self.control.set_rs(reg == Register::Data);
        self.control.set_rw(false);

        self.control.set_en(true);
        self.transfer()?;
        // Falling edge of EN clocks the nibble into the controller
        self.control.set_en(false);
        self.transfer()
    }

    fn transfer(&mut self) -> Result<(), Error<E>> {
        let [byte] = self.control.into_bytes();
        self.register.write_frame(&[byte]).map_err(Error::Pin)
    }
}

impl<DATA, CLK, LATCH, D, E> ufmt::uWrite for Lcd<DATA, CLK, LATCH, D>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
    D: DelayMs<u32>,
{
    type Error = Error<E>;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.put_str(s)
    }
}

impl<DATA, CLK, LATCH, D, E> core::fmt::Write for Lcd<DATA, CLK, LATCH, D>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
    D: DelayMs<u32>,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.put_str(s).map_err(|_| core::fmt::Error)
    }
}
