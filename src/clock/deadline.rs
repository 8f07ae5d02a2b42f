//! Non-blocking deadline checks.
//!
//! A `Deadline` is a captured counter value plus a threshold. Polling it
//! performs the comparison the spin delays use, without spinning, so callers
//! running an event loop can interleave other work.

use crate::config::ClockConfig;
use crate::io::RegisterIo;

use super::{Clock, TICKS_PER_UNIT};

/// How the tick delta is compared against the threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeadlineUnit {
    /// Delta divided by 1000 before comparing (`delay` semantics)
    Msecs,

    /// Raw tick delta (`udelay` semantics)
    Ticks,
}

/// Captured start tick and threshold.
///
/// Reached once `(now - start) / 1000 >= threshold` for [`DeadlineUnit::Msecs`]
/// or `now - start >= threshold` for [`DeadlineUnit::Ticks`]. The threshold
/// is fixed at creation; a later `clock_set` does not rescale it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Deadline {
    start: u32,
    threshold: u32,
    unit: DeadlineUnit,
}

impl Deadline {
    /// Build a deadline from its raw parts.
    pub const fn new(start: u32, threshold: u32, unit: DeadlineUnit) -> Self {
        Self {
            start,
            threshold,
            unit,
        }
    }

    /// Counter value captured at creation.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Threshold in units of [`Deadline::unit`].
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Comparison unit.
    pub fn unit(&self) -> DeadlineUnit {
        self.unit
    }

    /// Whether the deadline is reached at counter value `now`.
    pub fn is_reached(&self, now: u32) -> bool {
        let delta = now.wrapping_sub(self.start);
        match self.unit {
            DeadlineUnit::Msecs => delta / TICKS_PER_UNIT >= self.threshold,
            DeadlineUnit::Ticks => delta >= self.threshold,
        }
    }

    /// Sample the counter once and check the deadline.
    pub fn has_elapsed<R: RegisterIo, C: ClockConfig>(&self, clock: &mut Clock<R, C>) -> bool {
        self.is_reached(clock.clock_counter())
    }
}

impl<R: RegisterIo, C: ClockConfig> Clock<R, C> {
    /// Deadline `msec` milliseconds from now, with `delay` semantics.
    pub fn deadline_msecs(&mut self, msec: u32) -> Deadline {
        let threshold = msec.wrapping_mul(self.ticks_per_msec);
        Deadline::new(self.clock_counter(), threshold, DeadlineUnit::Msecs)
    }

    /// Deadline `usec` units from now, with `udelay` semantics.
    ///
    /// The threshold is `usec * ticks_per_msec` raw ticks.
    pub fn deadline_ticks(&mut self, usec: u32) -> Deadline {
        let start = self.clock_counter();
        Deadline::new(start, usec.wrapping_mul(self.ticks_per_msec), DeadlineUnit::Ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msecs_deadline() {
        let deadline = Deadline::new(500, 3, DeadlineUnit::Msecs);
        assert!(!deadline.is_reached(500));
        assert!(!deadline.is_reached(3_499));
        assert!(deadline.is_reached(3_500));
    }

    #[test]
    fn test_ticks_deadline() {
        let deadline = Deadline::new(500, 3, DeadlineUnit::Ticks);
        assert!(!deadline.is_reached(502));
        assert!(deadline.is_reached(503));
    }

    #[test]
    fn test_deadline_across_wrap() {
        let deadline = Deadline::new(u32::MAX - 9, 20, DeadlineUnit::Ticks);
        assert!(!deadline.is_reached(9));
        assert!(deadline.is_reached(10));
    }

    #[test]
    fn test_zero_threshold_reached_immediately() {
        let deadline = Deadline::new(1234, 0, DeadlineUnit::Msecs);
        assert!(deadline.is_reached(1234));
    }
}
