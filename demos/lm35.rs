//! LM35 temperature and light level from PE0 (AIN3)
//!
//! The LM35 gives 10mV per degree, so millivolts read directly as tenths of a
//! degree. The same sample also maps onto a 0..=10 light scale for the LDR
//! variant of the board.

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use embedded_hal::blocking::delay::DelayMs;
use tiva_shift_display::board::{self, Board};
use tiva_shift_display::drivers::adc::{Adc, AnalogInput};
use tiva_shift_display::drivers::sensors::{light_level, lm35_decicelsius};

/// Time between samples
const SAMPLE_MS: u32 = 1000;

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let mut adc = Adc::new(board.ADC0, AnalogInput::Ain3PE0, &board.power_control);
    let mut delay = tm4c123x_hal::delay::Delay::new(board.core_peripherals.SYST, board::clocks());

    ufmt::uwriteln!(&mut board.console, "lm35: sampling {:?}", adc.channel()).unwrap_or_default();

    loop {
        let raw = adc.read();
        let temperature = lm35_decicelsius(raw);
        ufmt::uwriteln!(
            &mut board.console,
            "temp={}.{}C light={}/10",
            temperature / 10,
            temperature % 10,
            light_level(raw)
        )
        .unwrap_or_default();
        delay.delay_ms(SAMPLE_MS);
    }
}
