//! Cycle the RGB LED red, blue, green with the SysTick delay

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin; // GPIO set high/low
use tiva_shift_display::board::{self, Board};
use tm4c123x_hal::gpio::GpioExt;

/// Time each colour stays on
const STEP_MS: u32 = 500;

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let pins_f = board.GPIO_PORTF.split(&board.power_control);
    let mut red = pins_f.pf1.into_push_pull_output();
    let mut blue = pins_f.pf2.into_push_pull_output();
    let mut green = pins_f.pf3.into_push_pull_output();

    let mut delay = tm4c123x_hal::delay::Delay::new(board.core_peripherals.SYST, board::clocks());

    ufmt::uwriteln!(&mut board.console, "blink: {}ms per colour", STEP_MS).unwrap_or_default();

    loop {
        red.set_high().unwrap_or_default();
        delay.delay_ms(STEP_MS);
        red.set_low().unwrap_or_default();

        blue.set_high().unwrap_or_default();
        delay.delay_ms(STEP_MS);
        blue.set_low().unwrap_or_default();

        green.set_high().unwrap_or_default();
        delay.delay_ms(STEP_MS);
        green.set_low().unwrap_or_default();
    }
}
