//! Conversions from raw 12-bit ADC counts (3.3V reference)

/// Full-scale ADC reading
pub const ADC_MAX: u16 = 4095;

/// ADC reference voltage in millivolts
pub const VREF_MV: u32 = 3300;

/// Resistor-ladder levels of the 16-key analog keypad, as `raw >> 4`
const KEYPAD_LEVELS: [(char, [u8; 2]); 16] = [
    ('0', [0xB7, 0xB6]),
    ('1', [0xB3, 0xB2]),
    ('2', [0xAE, 0xAD]),
    ('3', [0xAA, 0xA9]),
    ('4', [0xA6, 0xA7]),
    ('5', [0xA0, 0x9F]),
    ('6', [0x98, 0x97]),
    ('7', [0x92, 0x91]),
    ('8', [0x8C, 0x8B]),
    ('9', [0x81, 0x80]),
    ('A', [0x73, 0x72]),
    ('B', [0x66, 0x65]),
    ('C', [0x5A, 0x5A]),
    ('D', [0x41, 0x41]),
    ('E', [0x20, 0x20]),
    ('F', [0x00, 0x00]),
];

/// Decode the key pressed on the resistive keypad.
///
/// Returns `None` for readings between levels (no key, or a key bouncing)
/// and for anything above full scale.
pub fn decode_key(raw: u16) -> Option<char> {
    if raw > ADC_MAX {
        return None;
    }
    let level = (raw >> 4) as u8;
    KEYPAD_LEVELS
        .iter()
        .find(|(_, levels)| levels.contains(&level))
        .map(|&(key, _)| key)
}

/// Reading converted to millivolts
pub fn millivolts(raw: u16) -> u32 {
    raw.min(ADC_MAX) as u32 * VREF_MV / ADC_MAX as u32
}

/// LM35 temperature in tenths of a degree Celsius.
///
/// The LM35 outputs 10mV/C, so one millivolt is a tenth of a degree.
pub fn lm35_decicelsius(raw: u16) -> u32 {
    millivolts(raw)
}

/// LDR light intensity on a 0-10 scale
pub fn light_level(raw: u16) -> u8 {
    (raw as u32 * 10 / 3030).min(10) as u8
}

/// PWM compare value for closed-loop dimming from a potentiometer
pub fn duty_from_adc(raw: u16) -> u16 {
    (raw.min(ADC_MAX) as u32 * 3 / 4) as u16
}
