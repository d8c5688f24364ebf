//! Green LED brightness follows the potentiometer
//!
//! Pot on PD3 (AIN4), LED on PF3 driven by M1PWM7.

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use embedded_hal::blocking::delay::DelayMs;
use tiva_shift_display::board::{self, Board};
use tiva_shift_display::drivers::adc::{Adc, AnalogInput};
use tiva_shift_display::drivers::pwm::{Pwm, PwmDivider};
use tiva_shift_display::drivers::sensors::duty_from_adc;
use tm4c123x_hal::gpio::{GpioExt, AF5};

/// Period in PWM clocks, minus one. Just above the largest scaled sample.
const LOAD: u16 = 0x0EFF;
/// Time between updates
const UPDATE_MS: u32 = 20;

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let mut pins_f = board.GPIO_PORTF.split(&board.power_control);
    let pin = pins_f.pf3.into_af_push_pull::<AF5>(&mut pins_f.control);
    let mut pwm = Pwm::new(
        board.PWM1,
        pin,
        PwmDivider::Div64,
        LOAD,
        &board.power_control,
    );
    let mut adc = Adc::new(board.ADC0, AnalogInput::Ain4PD3, &board.power_control);
    let mut delay = tm4c123x_hal::delay::Delay::new(board.core_peripherals.SYST, board::clocks());

    ufmt::uwriteln!(&mut board.console, "pwm_pot: load={}", pwm.load()).unwrap_or_default();

    loop {
        pwm.set_compare(duty_from_adc(adc.read()));
        delay.delay_ms(UPDATE_MS);
    }
}
