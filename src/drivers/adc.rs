//! Single-sample reads from ADC0 sample sequencer 0
//!
//! Software-triggered, one step per sequence, completion polled on the raw
//! interrupt status. Good enough for potentiometers and slow sensors.

use tm4c123x_hal::sysctl::{control_power, Domain, PowerControl, PowerState, RunMode};
use tm4c123x_hal::tm4c123x::{self, ADC0};
use ufmt::derive::uDebug;

/// Sequencer 0 bit in ACTSS, PSSI, RIS and ISC
const SS0: u32 = 1 << 0;
/// SSCTL0 step 0: END0 | IE0
const SS0_SINGLE_STEP: u32 = 0x06;

/// Analog input channel and the pin it is bonded to
#[derive(uDebug, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum AnalogInput {
    Ain0PE3 = 0,
    Ain1PE2 = 1,
    Ain2PE1 = 2,
    Ain3PE0 = 3,
    Ain4PD3 = 4,
    Ain5PD2 = 5,
    Ain6PD1 = 6,
    Ain7PD0 = 7,
    Ain8PE5 = 8,
    Ain9PE4 = 9,
    Ain10PB4 = 10,
    Ain11PB5 = 11,
}

/// GPIO ports that carry analog inputs
#[derive(Clone, Copy)]
enum Port {
    B,
    D,
    E,
}

impl AnalogInput {
    /// GPIO port and pin mask
    fn pin(self) -> (Port, u32) {
        use AnalogInput::*;
        match self {
            Ain0PE3 => (Port::E, 1 << 3),
            Ain1PE2 => (Port::E, 1 << 2),
            Ain2PE1 => (Port::E, 1 << 1),
            Ain3PE0 => (Port::E, 1 << 0),
            Ain4PD3 => (Port::D, 1 << 3),
            Ain5PD2 => (Port::D, 1 << 2),
            Ain6PD1 => (Port::D, 1 << 1),
            Ain7PD0 => (Port::D, 1 << 0),
            Ain8PE5 => (Port::E, 1 << 5),
            Ain9PE4 => (Port::E, 1 << 4),
            Ain10PB4 => (Port::B, 1 << 4),
            Ain11PB5 => (Port::B, 1 << 5),
        }
    }

    /// Switch the pin to analog mode
    fn configure_pin(self, power_control: &PowerControl) {
        let (port, mask) = self.pin();
        let domain = match port {
            Port::B => Domain::GpioB,
            Port::D => Domain::GpioD,
            Port::E => Domain::GpioE,
        };
        control_power(power_control, domain, RunMode::Run, PowerState::On);

        // The HAL has no analog pin mode, so go around it. Only this pin's bits change.
        let regs = unsafe {
            match port {
                Port::B => &*tm4c123x::GPIO_PORTB::ptr(),
                Port::D => &*tm4c123x::GPIO_PORTD::ptr(),
                Port::E => &*tm4c123x::GPIO_PORTE::ptr(),
            }
        };
        regs.dir.modify(|r, w| unsafe { w.bits(r.bits() & !mask) });
        regs.afsel.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
        regs.den.modify(|r, w| unsafe { w.bits(r.bits() & !mask) });
        regs.amsel.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
    }
}

/// ADC0 reading one channel on demand
pub struct Adc {
    registers: ADC0,
    channel: AnalogInput,
}

impl Adc {
    /// Power on ADC0 and point sequencer 0 at `channel`
    pub fn new(registers: ADC0, channel: AnalogInput, power_control: &PowerControl) -> Self {
        //
        // 1. Analog mode on the input pin
        //
        channel.configure_pin(power_control);

        //
        // 2. Power on the ADC peripheral
        //
        control_power(power_control, Domain::Adc0, RunMode::Run, PowerState::On);

        //
        // 3. Configure sequencer 0 (must be disabled while configuring)
        //
        registers
            .actss
            .modify(|r, w| unsafe { w.bits(r.bits() & !SS0) });
        // Software trigger
        registers
            .emux
            .modify(|r, w| unsafe { w.bits(r.bits() & !0xF) });
        registers
            .ssmux0
            .write(|w| unsafe { w.bits(channel as u32) });
        registers.ssctl0.write(|w| unsafe { w.bits(SS0_SINGLE_STEP) });

        //
        // 4. Enable sequencer 0
        //
        registers
            .actss
            .modify(|r, w| unsafe { w.bits(r.bits() | SS0) });

        Self { registers, channel }
    }

    /// Channel this ADC samples
    pub fn channel(&self) -> AnalogInput {
        self.channel
    }

    /// Take one sample, blocking until conversion completes. Returns 0..=4095.
    pub fn read(&mut self) -> u16 {
        self.registers.pssi.write(|w| unsafe { w.bits(SS0) });
        while self.registers.ris.read().bits() & SS0 == 0 {}
        let sample = (self.registers.ssfifo0.read().bits() & 0xFFF) as u16;
        self.registers.isc.write(|w| unsafe { w.bits(SS0) });
        sample
    }

    /// Give back the peripheral
    pub fn free(self) -> ADC0 {
        self.registers
    }
}
