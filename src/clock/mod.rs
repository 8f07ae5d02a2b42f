//! Clock context: tick counter, clock-mode switch and elapsed-time checks.
//!
//! `Clock` owns the register interface together with the tick rate derived
//! from the PLL at the last `clock_set`. The rate is set in the constructor,
//! so every `Clock` value carries a configured rate.
//!
//! All time arithmetic uses wrapping `u32` math. Results are only meaningful
//! while the real elapsed time stays below one counter wrap period, see
//! [`wrap_period_msecs`].

pub mod deadline;
pub mod delay;

use core::marker::PhantomData;

use crate::config::{addac_divider, Ar9170Config, ClockConfig};
use crate::io::RegisterIo;
use crate::mode::ClockMode;
use crate::trace::{clock_debug, clock_warn};

pub use deadline::{Deadline, DeadlineUnit};

/// Counter ticks per elapsed-millisecond unit used by the comparisons.
pub const TICKS_PER_UNIT: u32 = 1000;

/// Milliseconds until the 32-bit counter wraps at `ticks_per_msec`.
///
/// Returns `None` for a zero rate. 44 gives 97_612 ms, 40 gives 107_374 ms.
pub const fn wrap_period_msecs(ticks_per_msec: u32) -> Option<u32> {
    if ticks_per_msec == 0 {
        return None;
    }
    let ticks_per_ms = ticks_per_msec as u64 * TICKS_PER_UNIT as u64;
    Some(((u32::MAX as u64 + 1) / ticks_per_ms) as u32)
}

/// Clock context.
///
/// Holds the register interface and the tick rate for the active clock
/// mode. Elapsed-time checks and delays read the rate from here, never
/// from a global.
///
/// Changing the clock through [`Clock::clock_set`] affects every other
/// timing user in the firmware, including interrupt-driven timers.
#[derive(Debug)]
pub struct Clock<R: RegisterIo, C: ClockConfig = Ar9170Config> {
    regs: R,
    ticks_per_msec: u32,
    mode: ClockMode,
    enabled: bool,
    _config: PhantomData<C>,
}

impl<R: RegisterIo> Clock<R, Ar9170Config> {
    /// Create a clock on the AR9170 register map and apply `mode`.
    pub fn new(regs: R, mode: ClockMode, enabled: bool) -> Self {
        Self::with_config(regs, mode, enabled)
    }
}

impl<R: RegisterIo, C: ClockConfig> Clock<R, C> {
    /// Create a clock on a custom register map and apply `mode`.
    pub fn with_config(regs: R, mode: ClockMode, enabled: bool) -> Self {
        let mut clock = Self {
            regs,
            ticks_per_msec: 0,
            mode,
            enabled,
            _config: PhantomData,
        };
        clock.clock_set(mode, enabled);
        clock
    }

    /// Switch the CPU clock and re-derive the tick rate.
    ///
    /// Samples the PLL ADDAC divider first and stores `divider >> 1` as the
    /// new rate, replacing the old one. Then writes `CLOCK_SEL_ON | mode`
    /// (or `CLOCK_SEL_OFF | mode`) to the clock-select register.
    ///
    /// This does more than change the CPU clock: interrupt-driven timers
    /// elsewhere in the firmware lose their stable time base.
    pub fn clock_set(&mut self, mode: ClockMode, enabled: bool) {
        let pll = self.regs.get(C::PLL_ADDAC);
        self.ticks_per_msec = addac_divider::<C>(pll) >> 1;

        let select = Self::clock_select_value(mode, enabled);
        self.regs.set(C::CLOCK_SEL, select);

        self.mode = mode;
        self.enabled = enabled;

        clock_debug!(
            "clock_set: mode={:?} on={} sel={:#x} pll_addac={:#x} ticks_per_msec={}",
            mode,
            enabled,
            select,
            pll,
            self.ticks_per_msec
        );
        if self.ticks_per_msec == 0 {
            clock_warn!("clock_set: PLL divider gives zero tick rate, delays return immediately");
        }
    }

    /// Value written to the clock-select register for `mode`/`enabled`.
    pub const fn clock_select_value(mode: ClockMode, enabled: bool) -> u32 {
        let selector = if enabled { C::CLOCK_SEL_ON } else { C::CLOCK_SEL_OFF };
        selector | mode.bits()
    }

    /// Current 32-bit tick count.
    ///
    /// Reads the high half, then the low half. A carry between the two reads
    /// is not corrected.
    #[inline]
    pub fn clock_counter(&mut self) -> u32 {
        let high = self.regs.get(C::CLOCK_HIGH);
        let low = self.regs.get(C::CLOCK_LOW);
        (high << 16) | low
    }

    /// Ticks since `t0`, correct across one counter wrap.
    #[inline]
    pub fn elapsed_ticks(&mut self, t0: u32) -> u32 {
        self.clock_counter().wrapping_sub(t0)
    }

    /// Whether more than `msecs` have passed since `t0`.
    ///
    /// Evaluates `(now - t0) / 1000 > msecs * ticks_per_msec`. Exactly
    /// reaching the threshold is not enough.
    pub fn is_after_msecs(&mut self, t0: u32, msecs: u32) -> bool {
        let elapsed = self.elapsed_ticks(t0) / TICKS_PER_UNIT;
        elapsed > msecs.wrapping_mul(self.ticks_per_msec)
    }

    /// Tick rate derived at the last `clock_set`.
    pub fn ticks_per_msec(&self) -> u32 {
        self.ticks_per_msec
    }

    /// Mode applied at the last `clock_set`.
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Whether the last `clock_set` switched the clock on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Longest interval the elapsed-time math handles at the current rate.
    pub fn wrap_period_msecs(&self) -> Option<u32> {
        wrap_period_msecs(self.ticks_per_msec)
    }

    /// Shared access to the register interface.
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Exclusive access to the register interface.
    ///
    /// Reprogramming PLL_ADDAC here does not update the tick rate; call
    /// [`Clock::clock_set`] afterwards.
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Release the register interface.
    pub fn free(self) -> R {
        self.regs
    }
}
