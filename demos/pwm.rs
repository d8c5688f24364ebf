//! Fixed-duty PWM on the green LED (PF3, M1PWM7)

#![no_std]
#![no_main]

extern crate tiva_shift_display;

use tiva_shift_display::board::Board;
use tiva_shift_display::drivers::pwm::{Pwm, PwmDivider};
use tm4c123x_hal::gpio::{GpioExt, AF5};

/// Period in PWM clocks, minus one. About 244Hz straight off the 16MHz clock.
const LOAD: u16 = 0xFFFF;
/// Counter value where the output goes high on the way down
const COMPARE: u16 = 0x0FFF;

#[no_mangle]
pub fn stellaris_main(mut board: Board) -> ! {
    let mut pins_f = board.GPIO_PORTF.split(&board.power_control);
    let pin = pins_f.pf3.into_af_push_pull::<AF5>(&mut pins_f.control);
    let mut pwm = Pwm::new(
        board.PWM1,
        pin,
        PwmDivider::Off,
        LOAD,
        &board.power_control,
    );
    pwm.set_compare(COMPARE);

    ufmt::uwriteln!(&mut board.console, "pwm: load={} compare={}", pwm.load(), COMPARE)
        .unwrap_or_default();

    loop {
        cortex_m::asm::wfi();
    }
}
