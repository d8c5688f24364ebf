//! Red LED follows SW1: lit while the switch is held

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use embedded_hal::digital::v2::{InputPin, OutputPin};
use tiva_shift_display::board::Board;
use tm4c123x_hal::gpio::GpioExt;

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let pins_f = board.GPIO_PORTF.split(&board.power_control);
    let mut red = pins_f.pf1.into_push_pull_output();
    // SW1 shorts PF4 to ground
    let sw1 = pins_f.pf4.into_pull_up_input();

    ufmt::uwriteln!(&mut board.console, "switch: hold SW1").unwrap_or_default();

    loop {
        if sw1.is_low().unwrap_or_default() {
            red.set_high().unwrap_or_default();
        } else {
            red.set_low().unwrap_or_default();
        }
    }
}
