//! Count across five chained 7-segment displays behind 74HC595s
//!
//! Wiring: PF2 serial data, PF3 shift clock, PC4 storage latch. The byte
//! shifted first ends up in the register furthest from the MCU.

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use embedded_hal::blocking::delay::DelayMs;
use tiva_shift_display::board::{self, Board};
use tiva_shift_display::drivers::seven_segment::{SevenSegment, DEMO_PATTERNS};
use tiva_shift_display::drivers::shift_register::ShiftRegister;
use tm4c123x_hal::gpio::GpioExt;

/// Time between frames
const FRAME_MS: u32 = 500;

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let pins_f = board.GPIO_PORTF.split(&board.power_control);
    let pins_c = board.GPIO_PORTC.split(&board.power_control);
    let register = ShiftRegister::new(
        pins_f.pf2.into_push_pull_output(),
        pins_f.pf3.into_push_pull_output(),
        pins_c.pc4.into_push_pull_output(),
    );
    let mut display: SevenSegment<_, _, _, 5> = SevenSegment::new(register);
    let mut delay = tm4c123x_hal::delay::Delay::new(board.core_peripherals.SYST, board::clocks());

    ufmt::uwriteln!(&mut board.console, "seven_segment: 5 digits").unwrap_or_default();

    let [one, two, three, four, all] = DEMO_PATTERNS;
    loop {
        if let Err(e) = display.show([four, three, two, one, all]) {
            ufmt::uwriteln!(&mut board.console, "display error: {:?}", e.kind())
                .unwrap_or_default();
        }
        delay.delay_ms(FRAME_MS);

        if let Err(e) = display.blank() {
            ufmt::uwriteln!(&mut board.console, "display error: {:?}", e.kind())
                .unwrap_or_default();
        }
        delay.delay_ms(FRAME_MS);
    }
}
