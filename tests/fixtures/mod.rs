//! Test fixtures for ar9170-clock testing.
//!
//! Provides:
//! - `ScriptedRegisters`: RegisterIo that replays a fixed list of counter values
//! - `pll_for_rate`: PLL_ADDAC value that derives a given tick rate

#![allow(dead_code)]

use ar9170_clock::{Ar9170Config, ClockConfig, RegisterIo};
use std::collections::VecDeque;

// ============================================================================
// ScriptedRegisters - Test Register Implementation
// ============================================================================

/// Register model that replays scripted counter samples.
///
/// Each read of CLOCK_HIGH pops the next scripted value and latches its low
/// half. Running past the end of the script panics, so a delay that keeps
/// spinning after its threshold fails loudly instead of hanging.
#[derive(Debug)]
pub struct ScriptedRegisters {
    /// Remaining counter samples
    script: VecDeque<u32>,

    /// Low half of the last sample
    latched_low: u32,

    /// Counter samples consumed so far
    samples: usize,

    /// PLL_ADDAC contents
    pll_addac: u32,

    /// Every write, in order
    writes: Vec<(u32, u32)>,
}

impl ScriptedRegisters {
    /// Create registers with a PLL value and a counter script.
    pub fn new(pll_addac: u32, script: &[u32]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            latched_low: 0,
            samples: 0,
            pll_addac,
            writes: Vec::new(),
        }
    }

    /// Append more counter samples.
    pub fn push_samples(&mut self, samples: &[u32]) {
        self.script.extend(samples.iter().copied());
    }

    /// Replace the PLL_ADDAC contents.
    pub fn set_pll_addac(&mut self, value: u32) {
        self.pll_addac = value;
    }

    /// Counter samples consumed so far.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Samples not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// All writes, oldest first.
    pub fn writes(&self) -> &[(u32, u32)] {
        &self.writes
    }

    /// Values written to CLOCK_SEL, oldest first.
    pub fn clock_sel_writes(&self) -> Vec<u32> {
        self.writes
            .iter()
            .filter(|(addr, _)| *addr == Ar9170Config::CLOCK_SEL)
            .map(|(_, value)| *value)
            .collect()
    }
}

impl RegisterIo for ScriptedRegisters {
    fn get(&mut self, addr: u32) -> u32 {
        if addr == Ar9170Config::CLOCK_HIGH {
            let now = self
                .script
                .pop_front()
                .expect("counter sampled past end of script");
            self.latched_low = now & 0xffff;
            self.samples += 1;
            now >> 16
        } else if addr == Ar9170Config::CLOCK_LOW {
            self.latched_low
        } else if addr == Ar9170Config::PLL_ADDAC {
            self.pll_addac
        } else {
            0
        }
    }

    fn set(&mut self, addr: u32, value: u32) {
        self.writes.push((addr, value));
    }
}

// ============================================================================
// PLL helpers
// ============================================================================

/// PLL_ADDAC value whose divider field yields `rate` after the `>> 1`.
pub fn pll_for_rate(rate: u32) -> u32 {
    ((rate << 1) << Ar9170Config::PLL_ADDAC_DIV_SHIFT) & Ar9170Config::PLL_ADDAC_DIV_MASK
}
