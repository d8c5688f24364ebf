//! Drivers for the displays and sensors wired to the LaunchPad
//!
//! Everything outside the `rt`-gated modules is generic over `embedded-hal`
//! traits and builds on the host.

pub mod lcd;
pub mod pwm;
pub mod sensors;
pub mod seven_segment;
pub mod shift_register;

#[cfg(feature = "rt")]
pub mod adc;
#[cfg(feature = "rt")]
pub mod timer;

#[cfg(test)]
pub(crate) mod testing;

use ufmt::derive::uDebug;

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// A shift-register line could not be driven
    Pin(E),
    /// Cursor position outside the display's address space
    CursorOutOfRange,
    /// Digit has no 7-segment pattern
    InvalidDigit,
}

/// Pin-independent view of [`Error`] for logging over the console
#[derive(Debug, uDebug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::Pin`]
    Pin,
    /// See [`Error::CursorOutOfRange`]
    CursorOutOfRange,
    /// See [`Error::InvalidDigit`]
    InvalidDigit,
}

impl<E> Error<E> {
    /// Drop the pin error payload
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Pin(_) => ErrorKind::Pin,
            Error::CursorOutOfRange => ErrorKind::CursorOutOfRange,
            Error::InvalidDigit => ErrorKind::InvalidDigit,
        }
    }
}
