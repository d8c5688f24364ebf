//! PWM1 generator 3, output B (M1PWM7) on PF3
//!
//! Down-counting. GENB = 0xC4 inverts the output when the counter reloads and
//! drives it high when the counter matches CMPA on the way down. The output is
//! high from the CMPA match until the reload inverts it, so a larger compare
//! value means a longer high time.
//!
//! The PWM clock is the system clock, optionally through the RCC pre-divider.
//! [`PwmDivider`] and [`period_hz`] are plain arithmetic and build on the host.

use static_assertions::const_assert_eq;
#[cfg(feature = "rt")]
use tm4c123x_hal::gpio::{gpiof::PF3, AlternateFunction, PushPull, AF5};
#[cfg(feature = "rt")]
use tm4c123x_hal::sysctl::{control_power, Domain, PowerControl, PowerState, RunMode};
#[cfg(feature = "rt")]
use tm4c123x_hal::tm4c123x::{self, PWM1};

/// RCC.USEPWMDIV: feed the PWM module through the pre-divider
const USEPWMDIV: u32 = 1 << 20;
/// RCC.PWMDIV field offset
const PWMDIV_SHIFT: u32 = 17;
/// RCC.PWMDIV field mask
const PWMDIV_MASK: u32 = 0x7 << PWMDIV_SHIFT;
/// Generator action: invert the output
const ACTION_INVERT: u32 = 0x1;
/// Generator action: drive the output high
const ACTION_HIGH: u32 = 0x3;
/// GENB.ACTLOAD field offset
const ACTLOAD_SHIFT: u32 = 2;
/// GENB.ACTCMPAD field offset
const ACTCMPAD_SHIFT: u32 = 6;
/// GENB: ACTLOAD = invert, ACTCMPAD = drive high
const GENB_INVERT_ON_LOAD_HIGH_ON_CMPA_DOWN: u32 =
    (ACTION_INVERT << ACTLOAD_SHIFT) | (ACTION_HIGH << ACTCMPAD_SHIFT);

const_assert_eq!(GENB_INVERT_ON_LOAD_HIGH_ON_CMPA_DOWN, 0xC4);

/// ENABLE.PWM7EN
#[cfg(feature = "rt")]
const PWM7EN: u32 = 1 << 7;

/// PWM clock source: the system clock directly, or divided down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmDivider {
    /// PWM clock is the system clock
    Off,
    /// System clock / 2
    Div2,
    /// System clock / 4
    Div4,
    /// System clock / 8
    Div8,
    /// System clock / 16
    Div16,
    /// System clock / 32
    Div32,
    /// System clock / 64
    Div64,
}

impl PwmDivider {
    /// Divisor between the system clock and the PWM clock
    pub const fn divisor(self) -> u32 {
        match self {
            PwmDivider::Off => 1,
            PwmDivider::Div2 => 2,
            PwmDivider::Div4 => 4,
            PwmDivider::Div8 => 8,
            PwmDivider::Div16 => 16,
            PwmDivider::Div32 => 32,
            PwmDivider::Div64 => 64,
        }
    }

    /// RCC value with this divider selected. Other RCC bits are kept.
    pub const fn apply(self, rcc: u32) -> u32 {
        let pwmdiv = match self {
            PwmDivider::Off => return rcc & !USEPWMDIV,
            PwmDivider::Div2 => 0,
            PwmDivider::Div4 => 1,
            PwmDivider::Div8 => 2,
            PwmDivider::Div16 => 3,
            PwmDivider::Div32 => 4,
            PwmDivider::Div64 => 7,
        };
        (rcc & !PWMDIV_MASK) | (pwmdiv << PWMDIV_SHIFT) | USEPWMDIV
    }
}

/// Output frequency for a `load` value, in whole hertz
pub const fn period_hz(sysclk_hz: u32, divider: PwmDivider, load: u16) -> u32 {
    sysclk_hz / divider.divisor() / (load as u32 + 1)
}

/// Green LED (or anything else on PF3) driven by M1PWM7
#[cfg(feature = "rt")]
pub struct Pwm {
    registers: PWM1,
    _pin: PF3<AlternateFunction<AF5, PushPull>>,
    load: u16,
}

#[cfg(feature = "rt")]
impl Pwm {
    /// Start generator 3 with period `load + 1` PWM clocks and 0% duty
    pub fn new(
        registers: PWM1,
        pin: PF3<AlternateFunction<AF5, PushPull>>,
        divider: PwmDivider,
        load: u16,
        power_control: &PowerControl,
    ) -> Self {
        control_power(power_control, Domain::Pwm1, RunMode::Run, PowerState::On);

        // Pre-divider lives in SYSCTL, which the HAL has already consumed
        let sysctl = unsafe { &*tm4c123x::SYSCTL::ptr() };
        sysctl
            .rcc
            .modify(|r, w| unsafe { w.bits(divider.apply(r.bits())) });

        // Disable generator while configuring
        registers._3_ctl.write(|w| unsafe { w.bits(0) });
        registers
            ._3_genb
            .write(|w| unsafe { w.bits(GENB_INVERT_ON_LOAD_HIGH_ON_CMPA_DOWN) });
        registers._3_load.write(|w| unsafe { w.bits(load as u32) });
        registers._3_cmpa.write(|w| unsafe { w.bits(0) });
        registers._3_ctl.write(|w| unsafe { w.bits(1) });
        registers
            .enable
            .modify(|r, w| unsafe { w.bits(r.bits() | PWM7EN) });

        Pwm {
            registers,
            _pin: pin,
            load,
        }
    }

    /// Period in PWM clocks, minus one
    pub fn load(&self) -> u16 {
        self.load
    }

    /// Set the compare value. Clamped to the load value.
    pub fn set_compare(&mut self, compare: u16) {
        let compare = compare.min(self.load);
        self.registers
            ._3_cmpa
            .write(|w| unsafe { w.bits(compare as u32) });
    }
}
