//! Bit-banged output to a 74HC595 serial-in, parallel-out shift register
//!
//! The register needs three lines: serial data (SDATA), shift clock (SHCP) and
//! storage/latch clock (STCP). Bits are shifted LSB-first on the rising edge of
//! the shift clock and only reach the parallel outputs on the rising edge of
//! the latch, so a frame of several bytes (daisy-chained registers) can be
//! committed at once.

use embedded_hal::digital::v2::OutputPin;

/// Owner of the three lines of a shift register (or a daisy chain of them)
pub struct ShiftRegister<DATA, CLK, LATCH> {
    data: DATA,
    clock: CLK,
    latch: LATCH,
}

impl<DATA, CLK, LATCH, E> ShiftRegister<DATA, CLK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    /// Take ownership of lines that are already configured as outputs
    pub fn new(data: DATA, clock: CLK, latch: LATCH) -> Self {
        ShiftRegister { data, clock, latch }
    }

    /// Shift 8 bits into the register, LSB first.
    ///
    /// Nothing reaches the outputs until [`ShiftRegister::close_latch`].
    pub fn shift_out(&mut self, byte: u8) -> Result<(), E> {
        for i in 0..8 {
            self.clock.set_low()?;
            if byte & (1 << i) != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }
            // Rising edge samples DATA
            self.clock.set_high()?;
        }
        Ok(())
    }

    /// Pull the latch low ahead of a frame
    pub fn open_latch(&mut self) -> Result<(), E> {
        self.latch.set_low()
    }

    /// Raise the latch, copying the shifted bits to the parallel outputs
    pub fn close_latch(&mut self) -> Result<(), E> {
        self.latch.set_high()
    }

    /// Shift a whole frame and commit it with a single latch edge.
    ///
    /// `bytes[0]` is shifted first, so on a daisy chain it ends up in the
    /// register furthest from the MCU.
    pub fn write_frame(&mut self, bytes: &[u8]) -> Result<(), E> {
        self.open_latch()?;
        for &byte in bytes {
            self.shift_out(byte)?;
        }
        self.close_latch()
    }

    /// Give back the lines
    pub fn release(self) -> (DATA, CLK, LATCH) {
        (self.data, self.clock, self.latch)
    }
}
