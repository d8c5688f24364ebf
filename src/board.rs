//! Hardware definitions capturing the configuration of the EK-TM4C123GXL board
use core::convert::Infallible;
use core::ptr::addr_of;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use tm4c123x_hal::gpio::{
    gpioa::{PA0, PA1},
    AlternateFunction, GpioExt, PushPull, AF1,
};
use tm4c123x_hal::serial::{NewlineMode, Serial};
use tm4c123x_hal::sysctl::{
    Clocks, CrystalFrequency, Divider, Oscillator, PowerControl, SysctlExt, SystemClock,
};
use tm4c123x_hal::time::{Bps, Hertz};
use tm4c123x_hal::tm4c123x::UART0;

/// Console baud rate
pub const CONSOLE_BAUD: u32 = 115_200;

/// UART0 on the debug USB port (PA0 RX, PA1 TX)
pub type Uart0 = Serial<
    UART0,
    PA1<AlternateFunction<AF1, PushPull>>,
    PA0<AlternateFunction<AF1, PushPull>>,
    (),
    (),
>;

/// Line-oriented text output over UART0.
///
/// Writes never fail; bytes that cannot be sent are dropped.
pub struct Console {
    uart: Uart0,
}

impl Console {
    fn new(uart: Uart0) -> Self {
        Console { uart }
    }
}

impl ufmt::uWrite for Console {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        let _ = core::fmt::Write::write_str(&mut self.uart, s);
        Ok(())
    }
}

/// Hardware definitions for the TM4C123 LaunchPad
///
/// GPIO ports are handed over unsplit because the demos wire the same pins
/// (PF2, PF3) to different things.
#[allow(non_snake_case)]
pub struct Board {
    /// The core peripherals on the TM4C123x
    pub core_peripherals: tm4c123x_hal::CorePeripherals,
    /// Power gating for peripherals in the TM4C123x
    pub power_control: PowerControl,

    /// Console on UART0
    pub console: Console,

    #[doc = "GPIO_PORTB"]
    pub GPIO_PORTB: tm4c123x_hal::tm4c123x::GPIO_PORTB,
    #[doc = "GPIO_PORTC"]
    pub GPIO_PORTC: tm4c123x_hal::tm4c123x::GPIO_PORTC,
    #[doc = "GPIO_PORTD"]
    pub GPIO_PORTD: tm4c123x_hal::tm4c123x::GPIO_PORTD,
    #[doc = "GPIO_PORTE"]
    pub GPIO_PORTE: tm4c123x_hal::tm4c123x::GPIO_PORTE,
    #[doc = "GPIO_PORTF"]
    pub GPIO_PORTF: tm4c123x_hal::tm4c123x::GPIO_PORTF,

    #[doc = "ADC0"]
    pub ADC0: tm4c123x_hal::tm4c123x::ADC0,
    #[doc = "ADC1"]
    pub ADC1: tm4c123x_hal::tm4c123x::ADC1,

    #[doc = "PWM0"]
    pub PWM0: tm4c123x_hal::tm4c123x::PWM0,
    #[doc = "PWM1"]
    pub PWM1: tm4c123x_hal::tm4c123x::PWM1,

    #[doc = "TIMER0"]
    pub TIMER0: tm4c123x_hal::tm4c123x::TIMER0,
    #[doc = "TIMER1"]
    pub TIMER1: tm4c123x_hal::tm4c123x::TIMER1,
    #[doc = "TIMER2"]
    pub TIMER2: tm4c123x_hal::tm4c123x::TIMER2,
    #[doc = "TIMER3"]
    pub TIMER3: tm4c123x_hal::tm4c123x::TIMER3,
    #[doc = "TIMER4"]
    pub TIMER4: tm4c123x_hal::tm4c123x::TIMER4,
    #[doc = "TIMER5"]
    pub TIMER5: tm4c123x_hal::tm4c123x::TIMER5,
}

/// Clock speed defaults: 16MHz crystal, no PLL
static mut CLOCKS: Clocks = Clocks {
    osc: Hertz(16_000_000),
    sysclk: Hertz(16_000_000),
};

/// Get the current clock rate of the CPU
pub fn clocks() -> &'static Clocks {
    unsafe { &*addr_of!(CLOCKS) }
}

impl Board {
    // Initialize peripherals
    pub(crate) fn new() -> Board {
        let core_peripherals = match tm4c123x_hal::CorePeripherals::take() {
            Some(x) => x,
            None => loop {}, // This error occurs before the panic handler could even work
        };
        let peripherals = match tm4c123x_hal::Peripherals::take() {
            Some(x) => x,
            None => loop {}, // This error occurs before the panic handler could even work
        };

        let mut sysctl = peripherals.SYSCTL.constrain();

        // FPU
        unsafe {
            core_peripherals.SCB.cpacr.modify(|d| {
                d | (0x3 /* full */ << 20/* CP10 privilege */)
                    | (0x3 /* full */ << 22/* CP11 privilege */)
            });
        }

        // Clocks
        // Run straight from the crystal; the delay and PWM settings in the
        // demos assume a 16MHz system clock
        sysctl.clock_setup.oscillator = Oscillator::Main(
            CrystalFrequency::_16mhz,
            SystemClock::UseOscillator(Divider::_1),
        );
        unsafe {
            CLOCKS = sysctl.clock_setup.freeze();
        }

        let mut pins_a = peripherals.GPIO_PORTA.split(&sysctl.power_control);
        let uart = Serial::uart0(
            peripherals.UART0,
            pins_a.pa1.into_af_push_pull::<AF1>(&mut pins_a.control),
            pins_a.pa0.into_af_push_pull::<AF1>(&mut pins_a.control),
            (),
            (),
            Bps(CONSOLE_BAUD),
            NewlineMode::SwapLFtoCRLF,
            clocks(),
            &sysctl.power_control,
        );

        Board {
            core_peripherals,
            power_control: sysctl.power_control,

            console: Console::new(uart),

            GPIO_PORTB: peripherals.GPIO_PORTB,
            GPIO_PORTC: peripherals.GPIO_PORTC,
            GPIO_PORTD: peripherals.GPIO_PORTD,
            GPIO_PORTE: peripherals.GPIO_PORTE,
            GPIO_PORTF: peripherals.GPIO_PORTF,

            ADC0: peripherals.ADC0,
            ADC1: peripherals.ADC1,

            PWM0: peripherals.PWM0,
            PWM1: peripherals.PWM1,

            TIMER0: peripherals.TIMER0,
            TIMER1: peripherals.TIMER1,
            TIMER2: peripherals.TIMER2,
            TIMER3: peripherals.TIMER3,
            TIMER4: peripherals.TIMER4,
            TIMER5: peripherals.TIMER5,
        }
    }
}

/// Rebuild the console from scratch for fault and panic reporting
pub(crate) unsafe fn steal_console() -> Console {
    let p = tm4c123x_hal::Peripherals::steal();
    let sysctl = p.SYSCTL.constrain();
    let mut pins_a = p.GPIO_PORTA.split(&sysctl.power_control);
    let uart = Serial::uart0(
        p.UART0,
        pins_a.pa1.into_af_push_pull::<AF1>(&mut pins_a.control),
        pins_a.pa0.into_af_push_pull::<AF1>(&mut pins_a.control),
        (),
        (),
        Bps(CONSOLE_BAUD),
        NewlineMode::SwapLFtoCRLF,
        clocks(),
        &sysctl.power_control,
    );
    Console::new(uart)
}

/// Unrecoverable error; blink the red LED until reset
pub fn safe() -> ! {
    let core_peripherals = unsafe { tm4c123x_hal::CorePeripherals::steal() };
    let p = unsafe { tm4c123x_hal::Peripherals::steal() };
    let pins = p.GPIO_PORTF.split(&p.SYSCTL.constrain().power_control);

    let mut delay = tm4c123x_hal::delay::Delay::new(core_peripherals.SYST, clocks());
    let mut red = pins.pf1.into_push_pull_output();
    loop {
        let _ = red.set_high();
        delay.delay_ms(200u32);
        let _ = red.set_low();
        delay.delay_ms(200u32);
    }
}
