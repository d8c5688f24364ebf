//! Greeting on a 16x2 HD44780 LCD driven in 4-bit mode through a 74HC595
//!
//! Wiring: PF2 serial data, PF3 shift clock, PE5 storage latch.

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use tiva_shift_display::board::{self, Board};
use tiva_shift_display::drivers::lcd::{Lcd, LcdTiming};
use tiva_shift_display::drivers::shift_register::ShiftRegister;
use tiva_shift_display::drivers::Error;
use tm4c123x_hal::gpio::GpioExt;

fn greet<DATA, CLK, LATCH, D, E>(lcd: &mut Lcd<DATA, CLK, LATCH, D>) -> Result<(), Error<E>>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
    D: DelayMs<u32>,
{
    lcd.init()?;
    lcd.goto_line1()?;
    lcd.put_str("Welcome")?;
    lcd.goto_line2()?;
    lcd.put_str("LCD 16x2")
}

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let pins_f = board.GPIO_PORTF.split(&board.power_control);
    let pins_e = board.GPIO_PORTE.split(&board.power_control);
    let register = ShiftRegister::new(
        pins_f.pf2.into_push_pull_output(),
        pins_f.pf3.into_push_pull_output(),
        pins_e.pe5.into_push_pull_output(),
    );
    let delay = tm4c123x_hal::delay::Delay::new(board.core_peripherals.SYST, board::clocks());
    let mut lcd = Lcd::new(register, delay, LcdTiming::default());

    match greet(&mut lcd) {
        Ok(()) => ufmt::uwriteln!(&mut board.console, "lcd: ready").unwrap_or_default(),
        Err(e) => {
            ufmt::uwriteln!(&mut board.console, "lcd error: {:?}", e.kind()).unwrap_or_default()
        }
    }

    loop {
        cortex_m::asm::wfi();
    }
}
