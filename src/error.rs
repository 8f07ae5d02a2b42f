//! Error types for the clock core.
//!
//! Clock operations are total and never fail; the only fallible step is
//! turning a raw number into a [`ClockMode`](crate::ClockMode).

use core::fmt;

/// Clock core error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// Raw value does not name one of the four clock modes
    InvalidClockMode {
        /// Value that was rejected
        value: u32,
    },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::InvalidClockMode { value } => {
                write!(f, "Invalid clock mode {:#x} (expected 0-3)", value)
            }
        }
    }
}

impl core::error::Error for ClockError {}
