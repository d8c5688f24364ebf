//! Buzzer on PB3 sounds while SW1 is held

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use embedded_hal::digital::v2::{InputPin, OutputPin};
use tiva_shift_display::board::Board;
use tm4c123x_hal::gpio::GpioExt;

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let pins_f = board.GPIO_PORTF.split(&board.power_control);
    let pins_b = board.GPIO_PORTB.split(&board.power_control);
    let sw1 = pins_f.pf4.into_pull_up_input();
    let mut buzzer = pins_b.pb3.into_push_pull_output();

    ufmt::uwriteln!(&mut board.console, "buzzer: hold SW1").unwrap_or_default();

    let mut sounding = false;
    loop {
        let pressed = sw1.is_low().unwrap_or_default();
        if pressed {
            buzzer.set_high().unwrap_or_default();
        } else {
            buzzer.set_low().unwrap_or_default();
        }
        if pressed != sounding {
            sounding = pressed;
            ufmt::uwriteln!(&mut board.console, "buzzer {}", if pressed { "on" } else { "off" })
                .unwrap_or_default();
        }
    }
}
