//! End-to-end check of the LCD driver against a behavioural model of the
//! hardware: a 74HC595 whose outputs feed an HD44780 in 4-bit mode.
//!
//! The model only sees line levels, so these tests pass only if the bit order,
//! latching, nibble order, EN strobing and pin remap all agree with each other.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;

use tiva_shift_display::drivers::lcd::{remap, Lcd, LcdTiming, COLUMNS};
use tiva_shift_display::drivers::shift_register::ShiftRegister;
use tiva_shift_display::drivers::Error;

const EN: u8 = 0x20;
const RW: u8 = 0x40;
const RS: u8 = 0x80;

/// Character controller state reachable through the instruction set we use
struct Hd44780 {
    four_bit: bool,
    two_line: bool,
    display_on: bool,
    cursor_on: bool,
    increment: bool,
    address: u8,
    ddram: [u8; 0x80],
    pending_high: Option<u8>,
    instructions: Vec<u8>,
}

impl Hd44780 {
    fn new() -> Self {
        Hd44780 {
            four_bit: false,
            two_line: false,
            display_on: false,
            cursor_on: false,
            increment: true,
            address: 0,
            ddram: [b' '; 0x80],
            pending_high: None,
            instructions: Vec::new(),
        }
    }

    /// Falling edge of EN with `outputs` on the register pins
    fn strobe(&mut self, outputs: u8) {
        assert_eq!(outputs & RW, 0, "driver must never read");
        // Undo the register-to-D4..D7 wiring
        let nibble = remap(outputs & 0x0F) & 0x0F;
        let data = outputs & RS != 0;

        if !self.four_bit {
            // 8-bit mode: D0-D3 are not wired, so each strobe is a whole byte
            assert!(!data, "data written before 4-bit switch");
            self.execute(nibble << 4);
            return;
        }

        match self.pending_high.take() {
            None => self.pending_high = Some(nibble),
            Some(high) => {
                let byte = (high << 4) | nibble;
                if data {
                    self.write_data(byte);
                } else {
                    self.execute(byte);
                }
            }
        }
    }

    fn execute(&mut self, cmd: u8) {
        self.instructions.push(cmd);
        if cmd & 0x80 != 0 {
            self.address = cmd & 0x7F;
        } else if cmd & 0x20 != 0 {
            self.four_bit = cmd & 0x10 == 0;
            self.two_line = cmd & 0x08 != 0;
        } else if cmd & 0x08 != 0 {
            self.display_on = cmd & 0x04 != 0;
            self.cursor_on = cmd & 0x02 != 0;
        } else if cmd & 0x04 != 0 {
            self.increment = cmd & 0x02 != 0;
        } else if cmd & 0x02 != 0 {
            self.address = 0;
        } else if cmd & 0x01 != 0 {
            self.ddram = [b' '; 0x80];
            self.address = 0;
        }
    }

    fn write_data(&mut self, byte: u8) {
        self.ddram[self.address as usize] = byte;
        self.address = if self.increment {
            (self.address + 1) & 0x7F
        } else {
            self.address.wrapping_sub(1) & 0x7F
        };
    }

    /// Visible text on `row`
    fn line(&self, row: usize) -> String {
        let start = row * 0x40;
        self.ddram[start..start + COLUMNS as usize]
            .iter()
            .map(|&b| b as char)
            .collect()
    }
}

/// 74HC595 storage register driving the controller
struct Hardware {
    data: bool,
    clock: bool,
    latch: bool,
    shift: u8,
    outputs: u8,
    lcd: Hd44780,
    delayed_ms: u32,
}

impl Hardware {
    fn set(&mut self, line: Line, high: bool) {
        match line {
            Line::Data => self.data = high,
            Line::Clock => {
                if high && !self.clock {
                    // First bit in ends up in the top stage after eight clocks
                    self.shift = (self.shift >> 1) | ((self.data as u8) << 7);
                }
                self.clock = high;
            }
            Line::Latch => {
                if high && !self.latch {
                    let previous = self.outputs;
                    self.outputs = self.shift;
                    if previous & EN != 0 && self.outputs & EN == 0 {
                        self.lcd.strobe(self.outputs);
                    }
                }
                self.latch = high;
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Line {
    Data,
    Clock,
    Latch,
}

struct Pin {
    hardware: Rc<RefCell<Hardware>>,
    line: Line,
}

impl OutputPin for Pin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.hardware.borrow_mut().set(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.hardware.borrow_mut().set(self.line, true);
        Ok(())
    }
}

struct Delay(Rc<RefCell<Hardware>>);

impl DelayMs<u32> for Delay {
    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().delayed_ms += ms;
    }
}

type TestLcd = Lcd<Pin, Pin, Pin, Delay>;

fn board() -> (Rc<RefCell<Hardware>>, TestLcd) {
    let hardware = Rc::new(RefCell::new(Hardware {
        data: false,
        clock: false,
        latch: true,
        shift: 0,
        outputs: 0,
        lcd: Hd44780::new(),
        delayed_ms: 0,
    }));
    let pin = |line| Pin {
        hardware: hardware.clone(),
        line,
    };
    let register = ShiftRegister::new(pin(Line::Data), pin(Line::Clock), pin(Line::Latch));
    let lcd = Lcd::new(register, Delay(hardware.clone()), LcdTiming::default());
    (hardware, lcd)
}

#[test]
fn init_leaves_controller_in_four_bit_two_line_mode() {
    let (hw, mut lcd) = board();
    lcd.init().unwrap();

    let hw = hw.borrow();
    assert!(hw.lcd.four_bit);
    assert!(hw.lcd.two_line);
    assert!(hw.lcd.display_on);
    assert!(!hw.lcd.cursor_on);
    assert!(hw.lcd.increment);
    assert_eq!(hw.lcd.pending_high, None);
    assert_eq!(
        hw.lcd.instructions,
        [0x30, 0x30, 0x30, 0x20, 0x28, 0x0C, 0x06, 0x01]
    );
    assert_eq!(hw.delayed_ms, 20 + 8 * 5);
}

#[test]
fn welcome_screen() {
    let (hw, mut lcd) = board();
    lcd.init().unwrap();
    lcd.goto_line1().unwrap();
    lcd.put_str("Welcome").unwrap();
    lcd.goto_line2().unwrap();
    lcd.put_str("LCD 16x2").unwrap();

    let hw = hw.borrow();
    assert_eq!(hw.lcd.line(0), "Welcome         ");
    assert_eq!(hw.lcd.line(1), "LCD 16x2        ");
}

#[test]
fn set_cursor_places_text() {
    let (hw, mut lcd) = board();
    lcd.init().unwrap();
    lcd.set_cursor(1, 5).unwrap();
    lcd.put_char(b'X').unwrap();
    lcd.set_cursor(0, 15).unwrap();
    lcd.put_char(b'Y').unwrap();

    let hw = hw.borrow();
    assert_eq!(hw.lcd.line(0), "               Y");
    assert_eq!(hw.lcd.line(1), "     X          ");
}

#[test]
fn set_cursor_rejects_positions_off_the_display() {
    let (hw, mut lcd) = board();
    lcd.init().unwrap();
    let sent = hw.borrow().lcd.instructions.len();

    assert_eq!(lcd.set_cursor(2, 0), Err(Error::CursorOutOfRange));
    assert_eq!(hw.borrow().lcd.instructions.len(), sent);
}

#[test]
fn clear_wipes_both_lines() {
    let (hw, mut lcd) = board();
    lcd.init().unwrap();
    lcd.put_str("stale").unwrap();
    lcd.goto_line2().unwrap();
    lcd.put_str("text").unwrap();
    lcd.clear().unwrap();
    lcd.put_str("ok").unwrap();

    let hw = hw.borrow();
    assert_eq!(hw.lcd.line(0), "ok              ");
    assert_eq!(hw.lcd.line(1), " ".repeat(16));
}

#[test]
fn home_returns_to_first_column() {
    let (hw, mut lcd) = board();
    lcd.init().unwrap();
    lcd.put_str("abc").unwrap();
    lcd.home().unwrap();
    lcd.put_str("X").unwrap();

    assert_eq!(hw.borrow().lcd.line(0), "Xbc             ");
}

#[test]
fn formatted_numbers() {
    let (hw, mut lcd) = board();
    lcd.init().unwrap();
    ufmt::uwrite!(&mut lcd, "T={}.{}C", 23u32, 4u32).unwrap();
    lcd.goto_line2().unwrap();
    core::fmt::Write::write_fmt(&mut lcd, format_args!("{:>5}", -12)).unwrap();

    let hw = hw.borrow();
    assert_eq!(hw.lcd.line(0), "T=23.4C         ");
    assert_eq!(hw.lcd.line(1), "  -12           ");
}

#[test]
fn every_printable_character_arrives_intact() {
    let (hw, mut lcd) = board();
    lcd.init().unwrap();
    for chunk in (0x20u8..0x7F).collect::<Vec<_>>().chunks(16) {
        lcd.home().unwrap();
        lcd.put_bytes(chunk.iter().copied()).unwrap();
        let expected: String = chunk.iter().map(|&b| b as char).collect();
        assert!(hw.borrow().lcd.line(0).starts_with(&expected));
    }
}
