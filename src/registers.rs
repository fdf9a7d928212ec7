//! MMC3416 register map and control-byte layouts
//!
//! Register addresses and bit layouts come from the MEMSIC MMC3416xPJ
//! datasheet. The control bytes are modeled as small structs with explicit
//! encode/decode so read-modify-write sequences preserve unrelated bits
//! without scattered shift arithmetic.

use crate::error::{Mmc3416Error, Result};
use std::fmt;
use std::str::FromStr;

// Output data registers (read-only). The sensor auto-increments the
// register pointer over these six registers only.
pub const REG_XOUT_LSB: u8 = 0x00;
pub const REG_XOUT_MSB: u8 = 0x01;
pub const REG_YOUT_LSB: u8 = 0x02;
pub const REG_YOUT_MSB: u8 = 0x03;
pub const REG_ZOUT_LSB: u8 = 0x04;
pub const REG_ZOUT_MSB: u8 = 0x05;
/// Status register (read-only)
pub const REG_STATUS: u8 = 0x06;
/// Internal control register 0
pub const REG_CONTROL_0: u8 = 0x07;
/// Internal control register 1
pub const REG_CONTROL_1: u8 = 0x08;
/// First register of the factory-reserved block 0x1B..=0x1F
pub const REG_FACTORY_BASE: u8 = 0x1B;
/// Product ID register (read-only)
pub const REG_PRODUCT_ID: u8 = 0x20;

/// Product ID reported by the MMC3416xPJ
pub const PRODUCT_ID_MMC3416: u8 = 0x06;

/// Status register bit 0: measurement done, data ready to read
pub const STATUS_MEAS_DONE: u8 = 0x01;

/// Control-1 pattern that triggers a software reset
pub const SW_RESET_PATTERN: u8 = 0xB6;

/// Number of registers in the 0x00..=0x08 sensor block
pub const SENSOR_REG_COUNT: usize = 9;
/// Number of registers in the 0x1B..=0x1F factory block
pub const FACTORY_REG_COUNT: usize = 5;

/// Display names for the sensor registers 0x00..=0x08, dump-table order
pub const SENSOR_REG_NAMES: [&str; SENSOR_REG_COUNT] = [
    "  Xout Low",
    " Xout High",
    "  Yout Low",
    " Yout High",
    "  Zout Low",
    " Zout High",
    "    Status",
    " Control-0",
    " Control-1",
];

/// Continuous measurement frequency, control-0 bits 2-3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frequency {
    /// Mode 0: 1.5 Hz
    #[default]
    Hz1_5 = 0,
    /// Mode 1: 13 Hz
    Hz13 = 1,
    /// Mode 2: 25 Hz
    Hz25 = 2,
    /// Mode 3: 50 Hz
    Hz50 = 3,
}

impl Frequency {
    /// Decode from the two frequency bits (callers shift bits 2-3 down first)
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Frequency::Hz1_5,
            1 => Frequency::Hz13,
            2 => Frequency::Hz25,
            _ => Frequency::Hz50,
        }
    }

    /// The raw two-bit field value
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Sample rate in Hz
    pub fn hz(self) -> f32 {
        match self {
            Frequency::Hz1_5 => 1.5,
            Frequency::Hz13 => 13.0,
            Frequency::Hz25 => 25.0,
            Frequency::Hz50 => 50.0,
        }
    }
}

impl TryFrom<u8> for Frequency {
    type Error = Mmc3416Error;

    fn try_from(mode: u8) -> Result<Self> {
        if mode > 3 {
            return Err(Mmc3416Error::OutOfRange(format!(
                "continuous read frequency mode must be 0..3, got {}",
                mode
            )));
        }
        Ok(Frequency::from_bits(mode))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Hz1_5 => write!(f, "1.5 Hz (1 sample every 1.5 seconds)"),
            Frequency::Hz13 => write!(f, "13 Hz (1 sample every 77 milliseconds)"),
            Frequency::Hz25 => write!(f, "25 Hz (1 sample every 40 milliseconds)"),
            Frequency::Hz50 => write!(f, "50 Hz (1 sample every 20 milliseconds)"),
        }
    }
}

/// Output resolution mode, control-1 bits 0-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Mode 0: 16 bit, 7.92 ms read time
    #[default]
    Bits16Slow = 0,
    /// Mode 1: 16 bit, 4.08 ms read time
    Bits16Fast = 1,
    /// Mode 2: 14 bit, 2.16 ms read time
    Bits14 = 2,
    /// Mode 3: 12 bit, 1.20 ms read time
    Bits12 = 3,
}

impl Resolution {
    /// Decode from the two resolution bits
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Resolution::Bits16Slow,
            1 => Resolution::Bits16Fast,
            2 => Resolution::Bits14,
            _ => Resolution::Bits12,
        }
    }

    /// The raw two-bit field value
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Conversion time for one sample in milliseconds
    pub fn read_time_ms(self) -> f32 {
        match self {
            Resolution::Bits16Slow => 7.92,
            Resolution::Bits16Fast => 4.08,
            Resolution::Bits14 => 2.16,
            Resolution::Bits12 => 1.20,
        }
    }
}

impl FromStr for Resolution {
    type Err = Mmc3416Error;

    /// Parse the command-line spelling: `12`, `14`, `16` or `16h`
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "16h" => Ok(Resolution::Bits16Slow),
            "16" => Ok(Resolution::Bits16Fast),
            "14" => Ok(Resolution::Bits14),
            "12" => Ok(Resolution::Bits12),
            other => Err(Mmc3416Error::OutOfRange(format!(
                "output resolution mode must be 12, 14, 16 or 16h, got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Bits16Slow => write!(f, "16 bit (7.92ms read time)"),
            Resolution::Bits16Fast => write!(f, "16 bit (4.08ms read time)"),
            Resolution::Bits14 => write!(f, "14 bit (2.16ms read time)"),
            Resolution::Bits12 => write!(f, "12 bit (1.20ms read time)"),
        }
    }
}

/// Decoded internal control register 0 (0x07)
///
/// Covers all eight bits, so `decode` followed by `encode` is lossless and
/// can be used for read-modify-write updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Control0 {
    /// Bit 0: request a new measurement
    pub take_measurement: bool,
    /// Bit 1: continuous measurement mode enabled
    pub continuous: bool,
    /// Bits 2-3: continuous measurement frequency
    pub frequency: Frequency,
    /// Bit 4: charge the cap from VDD instead of the charge pump
    pub no_boost: bool,
    /// Bit 5: SET strobe (also commits a new configuration)
    pub set_strobe: bool,
    /// Bit 6: RESET strobe
    pub reset_strobe: bool,
    /// Bit 7: refill the SET/RESET capacitor
    pub refill_cap: bool,
}

impl Control0 {
    pub fn decode(raw: u8) -> Self {
        Control0 {
            take_measurement: raw & 0x01 != 0,
            continuous: raw & 0x02 != 0,
            frequency: Frequency::from_bits((raw >> 2) & 0x03),
            no_boost: raw & 0x10 != 0,
            set_strobe: raw & 0x20 != 0,
            reset_strobe: raw & 0x40 != 0,
            refill_cap: raw & 0x80 != 0,
        }
    }

    pub fn encode(&self) -> u8 {
        let mut raw = self.frequency.bits() << 2;
        if self.take_measurement {
            raw |= 0x01;
        }
        if self.continuous {
            raw |= 0x02;
        }
        if self.no_boost {
            raw |= 0x10;
        }
        if self.set_strobe {
            raw |= 0x20;
        }
        if self.reset_strobe {
            raw |= 0x40;
        }
        if self.refill_cap {
            raw |= 0x80;
        }
        raw
    }
}

/// Decoded internal control register 1 (0x08)
///
/// Only the resolution field is interpreted; the remaining bits are carried
/// through untouched so encode/decode stays lossless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Control1 {
    /// Bits 0-1: output resolution mode
    pub resolution: Resolution,
    reserved: u8,
}

impl Control1 {
    pub fn decode(raw: u8) -> Self {
        Control1 {
            resolution: Resolution::from_bits(raw & 0x03),
            reserved: raw & !0x03,
        }
    }

    pub fn encode(&self) -> u8 {
        self.reserved | self.resolution.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control0_decode_matches_bit_layout() {
        let ctl = Control0::decode(0x2F); // TM | CM | freq 3 | SET strobe
        assert!(ctl.take_measurement);
        assert!(ctl.continuous);
        assert_eq!(ctl.frequency, Frequency::Hz50);
        assert!(!ctl.no_boost);
        assert!(ctl.set_strobe);
        assert!(!ctl.reset_strobe);
        assert!(!ctl.refill_cap);
    }

    #[test]
    fn control0_roundtrip_is_lossless() {
        for raw in 0..=255u8 {
            assert_eq!(Control0::decode(raw).encode(), raw);
        }
    }

    #[test]
    fn control1_preserves_unrelated_bits() {
        let mut ctl = Control1::decode(0xB4);
        assert_eq!(ctl.resolution, Resolution::Bits16Slow);
        ctl.resolution = Resolution::Bits12;
        assert_eq!(ctl.encode(), 0xB7);
    }

    #[test]
    fn frequency_mode_bounds() {
        assert_eq!(Frequency::try_from(0).unwrap(), Frequency::Hz1_5);
        assert_eq!(Frequency::try_from(3).unwrap(), Frequency::Hz50);
        assert!(matches!(
            Frequency::try_from(4),
            Err(Mmc3416Error::OutOfRange(_))
        ));
    }

    #[test]
    fn resolution_cli_spellings() {
        assert_eq!("16h".parse::<Resolution>().unwrap(), Resolution::Bits16Slow);
        assert_eq!("16".parse::<Resolution>().unwrap(), Resolution::Bits16Fast);
        assert_eq!("14".parse::<Resolution>().unwrap(), Resolution::Bits14);
        assert_eq!("12".parse::<Resolution>().unwrap(), Resolution::Bits12);
        assert!("18".parse::<Resolution>().is_err());
    }
}
