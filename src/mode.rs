//! CPU clock mode selection.

use crate::error::ClockError;

/// CPU clock source/multiplier.
///
/// The discriminant is OR-ed into the clock-select register value together
/// with the on/off selector bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ClockMode {
    /// 40MHz crystal oscillator
    Osc40Mhz = 0,

    /// 20-22MHz AHB clock
    Mhz20To22 = 1,

    /// 40-44MHz AHB clock
    Mhz40To44 = 2,

    /// 80-88MHz AHB clock
    Mhz80To88 = 3,
}

impl ClockMode {
    /// All modes in discriminant order.
    pub const ALL: [ClockMode; 4] = [
        ClockMode::Osc40Mhz,
        ClockMode::Mhz20To22,
        ClockMode::Mhz40To44,
        ClockMode::Mhz80To88,
    ];

    /// Raw mode bits as written to the clock-select register.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Convert raw mode bits back to a mode.
    pub const fn from_raw(value: u32) -> Result<Self, ClockError> {
        match value {
            0 => Ok(ClockMode::Osc40Mhz),
            1 => Ok(ClockMode::Mhz20To22),
            2 => Ok(ClockMode::Mhz40To44),
            3 => Ok(ClockMode::Mhz80To88),
            _ => Err(ClockError::InvalidClockMode { value }),
        }
    }
}

impl TryFrom<u32> for ClockMode {
    type Error = ClockError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl From<ClockMode> for u32 {
    fn from(mode: ClockMode) -> u32 {
        mode.bits()
    }
}
