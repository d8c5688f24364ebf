//! Chain of common-cathode 7-segment digits behind daisy-chained 74HC595s
//!
//! Segment encoding: bit 7 = a, bit 6 = b, ... bit 1 = g, bit 0 = decimal
//! point. Every frame is latched once, after all digits are shifted, so the
//! display never shows a half-updated number.

use embedded_hal::digital::v2::OutputPin;

use super::shift_register::ShiftRegister;
use super::Error;

/// Patterns for 1, 2, 3, 4 and all segments lit
pub const DEMO_PATTERNS: [u8; 5] = [0x60, 0xDA, 0xF2, 0x66, 0xFF];

/// Patterns for decimal digits 0-9
pub const DIGITS: [u8; 10] = [0xFC, 0x60, 0xDA, 0xF2, 0x66, 0xB6, 0xBE, 0xE0, 0xFE, 0xF6];

/// Decimal point segment, OR it onto a digit pattern
pub const DECIMAL_POINT: u8 = 0x01;

/// Pattern for a decimal digit, if it has one
pub fn digit_pattern(digit: u8) -> Option<u8> {
    DIGITS.get(digit as usize).copied()
}

/// `N` digits sharing one shift-register chain
pub struct SevenSegment<DATA, CLK, LATCH, const N: usize> {
    register: ShiftRegister<DATA, CLK, LATCH>,
}

impl<DATA, CLK, LATCH, E, const N: usize> SevenSegment<DATA, CLK, LATCH, N>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    /// Wrap a shift-register chain with `N` digits on it
    pub fn new(register: ShiftRegister<DATA, CLK, LATCH>) -> Self {
        SevenSegment { register }
    }

    /// Show raw segment patterns as one frame.
    ///
    /// `patterns[0]` is shifted first and so lands on the digit furthest down
    /// the chain.
    pub fn show(&mut self, patterns: [u8; N]) -> Result<(), Error<E>> {
        self.register.write_frame(&patterns).map_err(Error::Pin)
    }

    /// Show decimal digits. Nothing is sent if any digit is above 9.
    pub fn show_digits(&mut self, digits: [u8; N]) -> Result<(), Error<E>> {
        let mut patterns = [0u8; N];
        for (pattern, &digit) in patterns.iter_mut().zip(digits.iter()) {
            *pattern = digit_pattern(digit).ok_or(Error::InvalidDigit)?;
        }
        self.show(patterns)
    }

    /// Turn every segment off
    pub fn blank(&mut self) -> Result<(), Error<E>> {
        self.show([0; N])
    }

    /// Give back the shift-register chain
    pub fn release(self) -> ShiftRegister<DATA, CLK, LATCH> {
        self.register
    }
}
