//! Deterministic in-memory register model.
//!
//! `SimRegisters` stands in for the timer and power blocks so the clock
//! logic can run on a host. Addresses come from the same [`ClockConfig`] the
//! [`Clock`](crate::Clock) is built with. The tick counter advances by a
//! fixed step every time it is sampled (a read of CLOCK_HIGH), and the
//! matching low half is latched for the following CLOCK_LOW read. Time
//! therefore only moves when the code under test looks at the clock.
//!
//! Register writes are journaled in a fixed-capacity ring; once full the
//! oldest entry is dropped.

use core::marker::PhantomData;

use crate::config::{Ar9170Config, ClockConfig, PLL_ADDAC_88MHZ};
use crate::io::RegisterIo;

/// Number of plain (non-counter) registers the model can hold.
pub const MAX_REGISTERS: usize = 8;

/// Simulated register file with a write journal of `N` entries.
///
/// # Panics
///
/// Writing more than [`MAX_REGISTERS`] distinct plain addresses panics. The
/// model never drops a register value silently.
#[derive(Debug)]
pub struct SimRegisters<const N: usize, C: ClockConfig = Ar9170Config> {
    counter: u32,
    step: u32,
    latched_low: u32,
    samples: usize,
    values: heapless::LinearMap<u32, u32, MAX_REGISTERS>,
    writes: heapless::Vec<(u32, u32), N>,
    _config: PhantomData<C>,
}

impl<const N: usize> SimRegisters<N, Ar9170Config> {
    /// AR9170 map: counter at 0, one tick per sample, PLL_ADDAC at 88MHz.
    pub fn new() -> Self {
        Self::with_config()
    }
}

impl<const N: usize, C: ClockConfig> SimRegisters<N, C> {
    /// Model for the register map `C`, same initial state as `new`.
    pub fn with_config() -> Self {
        let mut regs = Self {
            counter: 0,
            step: 1,
            latched_low: 0,
            samples: 0,
            values: heapless::LinearMap::new(),
            writes: heapless::Vec::new(),
            _config: PhantomData,
        };
        regs.store(C::PLL_ADDAC, PLL_ADDAC_88MHZ);
        regs
    }

    /// Builder: initial counter value.
    pub fn with_counter(mut self, counter: u32) -> Self {
        self.counter = counter;
        self
    }

    /// Builder: ticks added per counter sample.
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    /// Builder: PLL_ADDAC register contents.
    pub fn with_pll_addac(mut self, value: u32) -> Self {
        self.set_pll_addac(value);
        self
    }

    /// Value the next counter sample will return.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Jump the counter to `counter`.
    pub fn set_counter(&mut self, counter: u32) {
        self.counter = counter;
    }

    /// Ticks added per counter sample.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Change the ticks added per counter sample.
    pub fn set_step(&mut self, step: u32) {
        self.step = step;
    }

    /// Advance the counter without sampling it.
    pub fn advance(&mut self, ticks: u32) {
        self.counter = self.counter.wrapping_add(ticks);
    }

    /// Reprogram PLL_ADDAC (as band-switch code would).
    ///
    /// Writes through this call are not journaled.
    pub fn set_pll_addac(&mut self, value: u32) {
        self.store(C::PLL_ADDAC, value);
    }

    /// Number of counter samples taken so far.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Journaled `(address, value)` writes, oldest first.
    pub fn writes(&self) -> &[(u32, u32)] {
        &self.writes
    }

    /// Most recent journaled value written to `addr`.
    pub fn last_write(&self, addr: u32) -> Option<u32> {
        self.writes
            .iter()
            .rev()
            .find(|(a, _)| *a == addr)
            .map(|(_, v)| *v)
    }

    /// Empty the write journal.
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    fn store(&mut self, addr: u32, value: u32) {
        if self.values.insert(addr, value).is_err() {
            panic!(
                "SimRegisters: no slot for register {:#x}, model holds {} registers",
                addr, MAX_REGISTERS
            );
        }
    }

    fn sample(&mut self) -> u32 {
        let now = self.counter;
        self.counter = self.counter.wrapping_add(self.step);
        self.latched_low = now & 0xffff;
        self.samples += 1;
        now >> 16
    }
}

impl<const N: usize, C: ClockConfig> Default for SimRegisters<N, C> {
    fn default() -> Self {
        Self::with_config()
    }
}

impl<const N: usize, C: ClockConfig> RegisterIo for SimRegisters<N, C> {
    fn get(&mut self, addr: u32) -> u32 {
        if addr == C::CLOCK_HIGH {
            self.sample()
        } else if addr == C::CLOCK_LOW {
            self.latched_low
        } else {
            self.values.get(&addr).copied().unwrap_or(0)
        }
    }

    fn set(&mut self, addr: u32, value: u32) {
        // Counter halves are read-only
        if addr != C::CLOCK_HIGH && addr != C::CLOCK_LOW {
            self.store(addr, value);
        }

        if N > 0 {
            if self.writes.is_full() {
                self.writes.remove(0);
            }
            let _ = self.writes.push((addr, value));
        }
    }
}
