//! Recording doubles for the shift-register lines and the delay provider
//!
//! Every pin and delay handed out by a [`Timeline`] appends to the same log, so
//! tests can assert on the interleaving of DATA, CLOCK, LATCH and waits.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use super::shift_register::ShiftRegister;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data,
    Clock,
    Latch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    Delay(u32),
}

/// What a 74HC595 chain made visible, interleaved with waits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Bytes shifted since the previous latch, in shift order
    Frame(Vec<u8>),
    Delay(u32),
}

#[derive(Clone, Default)]
pub struct Timeline(Rc<RefCell<Vec<Event>>>);

pub type TestRegister = ShiftRegister<RecordingPin, RecordingPin, RecordingPin>;

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self, line: Line) -> RecordingPin {
        RecordingPin {
            line,
            log: self.clone(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay { log: self.clone() }
    }

    pub fn register(&self) -> TestRegister {
        ShiftRegister::new(
            self.pin(Line::Data),
            self.pin(Line::Clock),
            self.pin(Line::Latch),
        )
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    /// Replay the log through a shift-register model.
    ///
    /// Bits are sampled on CLOCK rising edges and committed on LATCH rising
    /// edges. Panics if a latch would commit a partial byte.
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = Vec::new();
        let mut bits: Vec<bool> = Vec::new();
        let (mut data, mut clock, mut latch) = (false, false, false);

        for event in self.events() {
            match event {
                Event::Set(Line::Data, level) => data = level,
                Event::Set(Line::Clock, level) => {
                    if level && !clock {
                        bits.push(data);
                    }
                    clock = level;
                }
                Event::Set(Line::Latch, level) => {
                    if level && !latch {
                        assert_eq!(bits.len() % 8, 0, "latched a partial byte");
                        let bytes = bits
                            .chunks(8)
                            .map(|byte| {
                                byte.iter()
                                    .enumerate()
                                    .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << i))
                            })
                            .collect();
                        steps.push(Step::Frame(bytes));
                        bits.clear();
                    }
                    latch = level;
                }
                Event::Delay(ms) => steps.push(Step::Delay(ms)),
            }
        }

        steps
    }

    /// Committed frames only, waits dropped
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.steps()
            .into_iter()
            .filter_map(|step| match step {
                Step::Frame(bytes) => Some(bytes),
                Step::Delay(_) => None,
            })
            .collect()
    }

    /// Committed frames flattened into one byte stream
    pub fn latched_bytes(&self) -> Vec<u8> {
        self.frames().into_iter().flatten().collect()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Delay(ms) => Some(ms),
                Event::Set(..) => None,
            })
            .collect()
    }

    /// Levels written to one line, in order
    pub fn levels(&self, line: Line) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Set(l, level) if l == line => Some(level),
                _ => None,
            })
            .collect()
    }
}

pub struct RecordingPin {
    line: Line,
    log: Timeline,
}

impl OutputPin for RecordingPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Set(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Set(self.line, true));
        Ok(())
    }
}

pub struct RecordingDelay {
    log: Timeline,
}

impl DelayMs<u32> for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Delay(ms));
    }
}
