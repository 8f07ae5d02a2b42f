//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

pub use fixtures::{pll_for_rate, ScriptedRegisters};

use ar9170_clock::{Clock, ClockMode, SimRegisters};

// ============================================================================
// Clock Creation Helpers
// ============================================================================

/// Create a clock over scripted registers at `rate` ticks per msec.
///
/// The scripted counter starts empty; push samples before reading the clock.
pub fn scripted_clock(rate: u32) -> Clock<ScriptedRegisters> {
    Clock::new(
        ScriptedRegisters::new(pll_for_rate(rate), &[]),
        ClockMode::Mhz40To44,
        true,
    )
}

/// Create a clock over the simulated register file.
pub fn sim_clock(pll_addac: u32, step: u32) -> Clock<SimRegisters<16>> {
    let regs = SimRegisters::new().with_pll_addac(pll_addac).with_step(step);
    let mut clock = Clock::new(regs, ClockMode::Mhz80To88, true);
    clock.registers_mut().clear_writes();
    clock
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the number of counter samples a call consumed.
pub fn assert_samples(regs: &ScriptedRegisters, expected: usize, what: &str) {
    assert_eq!(
        regs.samples(),
        expected,
        "{}: expected {} counter samples, got {}",
        what,
        expected,
        regs.samples()
    );
}
