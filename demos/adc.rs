//! Read the potentiometer on PD3 (AIN4) and log it over the console

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use embedded_hal::blocking::delay::DelayMs;
use tiva_shift_display::board::{self, Board};
use tiva_shift_display::drivers::adc::{Adc, AnalogInput};
use tiva_shift_display::drivers::sensors::millivolts;

/// Time between samples
const SAMPLE_MS: u32 = 250;

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let mut adc = Adc::new(board.ADC0, AnalogInput::Ain4PD3, &board.power_control);
    let mut delay = tm4c123x_hal::delay::Delay::new(board.core_peripherals.SYST, board::clocks());

    ufmt::uwriteln!(&mut board.console, "adc: sampling {:?}", adc.channel()).unwrap_or_default();

    loop {
        let raw = adc.read();
        ufmt::uwriteln!(&mut board.console, "raw={} mv={}", raw, millivolts(raw))
            .unwrap_or_default();
        delay.delay_ms(SAMPLE_MS);
    }
}
