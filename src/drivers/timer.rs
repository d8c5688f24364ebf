//! Millisecond delay on general-purpose TIMER1
//!
//! An alternative to the SysTick delay that leaves SYST free. Timer A runs in
//! 32-bit periodic mode with a 1ms period; each elapsed period is polled and
//! acknowledged. Every delay restarts the count so the first period is whole.

use embedded_hal::blocking::delay::DelayMs;
use tm4c123x_hal::sysctl::{control_power, Clocks, Domain, PowerControl, PowerState, RunMode};
use tm4c123x_hal::tm4c123x::TIMER1;

/// CFG: 32-bit timer configuration
const CFG_32_BIT: u32 = 0x0;
/// TAMR.TAMR: periodic mode
const TAMR_PERIODIC: u32 = 0x2;
/// CTL.TAEN
const TAEN: u32 = 1 << 0;
/// RIS.TATORIS / ICR.TATOCINT
const TATO: u32 = 1 << 0;

/// Blocking delay counted in TIMER1 timeouts
pub struct TimerDelay {
    timer: TIMER1,
    reload: u32,
}

impl TimerDelay {
    /// Configure TIMER1 for 1ms periods at the current system clock and start it
    pub fn new(timer: TIMER1, clocks: &Clocks, power_control: &PowerControl) -> Self {
        control_power(power_control, Domain::Timer1, RunMode::Run, PowerState::On);

        let reload = clocks.sysclk.0 / 1000 - 1;
        timer.ctl.write(|w| unsafe { w.bits(0) });
        timer.cfg.write(|w| unsafe { w.bits(CFG_32_BIT) });
        timer.tamr.write(|w| unsafe { w.bits(TAMR_PERIODIC) });
        timer.tailr.write(|w| unsafe { w.bits(reload) });
        timer.icr.write(|w| unsafe { w.bits(TATO) });
        timer.ctl.modify(|r, w| unsafe { w.bits(r.bits() | TAEN) });

        TimerDelay { timer, reload }
    }

    /// Stop the timer and give it back
    pub fn free(self) -> TIMER1 {
        self.timer.ctl.write(|w| unsafe { w.bits(0) });
        self.timer
    }
}

impl DelayMs<u32> for TimerDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.timer.ctl.write(|w| unsafe { w.bits(0) });
        self.timer.tav.write(|w| unsafe { w.bits(self.reload) });
        self.timer.icr.write(|w| unsafe { w.bits(TATO) });
        self.timer.ctl.write(|w| unsafe { w.bits(TAEN) });

        for _ in 0..ms {
            while self.timer.ris.read().bits() & TATO == 0 {}
            self.timer.icr.write(|w| unsafe { w.bits(TATO) });
        }
    }
}

impl DelayMs<u16> for TimerDelay {
    fn delay_ms(&mut self, ms: u16) {
        DelayMs::<u32>::delay_ms(self, ms as u32);
    }
}
