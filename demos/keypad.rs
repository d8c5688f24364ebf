//! Decode a resistor-ladder keypad on PD2 (AIN5)
//!
//! Each key pulls the ladder to its own voltage; the top eight bits of the
//! sample pick the key. Keys are logged once per press.

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use embedded_hal::blocking::delay::DelayMs;
use tiva_shift_display::board::{self, Board};
use tiva_shift_display::drivers::adc::{Adc, AnalogInput};
use tiva_shift_display::drivers::sensors::decode_key;

/// Time between scans
const SCAN_MS: u32 = 50;

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let mut adc = Adc::new(board.ADC0, AnalogInput::Ain5PD2, &board.power_control);
    let mut delay = tm4c123x_hal::delay::Delay::new(board.core_peripherals.SYST, board::clocks());

    ufmt::uwriteln!(&mut board.console, "keypad: press a key").unwrap_or_default();

    let mut last = None;
    loop {
        let raw = adc.read();
        let key = decode_key(raw);
        if key != last {
            if let Some(c) = key {
                let mut buf = [0u8; 4];
                let name: &str = c.encode_utf8(&mut buf);
                ufmt::uwriteln!(&mut board.console, "key {} (raw={})", name, raw)
                    .unwrap_or_default();
            }
            last = key;
        }
        delay.delay_ms(SCAN_MS);
    }
}
