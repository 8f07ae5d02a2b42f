//! Code-size measurement build.
//!
//! Links the clock core into a cortex-m image so `cargo size`/`cargo bloat`
//! can report its footprint. The AR9170 CPU is not ARM: this binary is only
//! built and measured, never flashed, and its register addresses are not
//! backed by hardware on any cortex-m part.

#![no_std]
#![no_main]

use ar9170_clock::{Clock, ClockMode, MmioRegisters};
use cortex_m_rt::entry;
use panic_halt as _;

// Blink period on the 80-88MHz clock
const PERIOD_MS: u32 = 500;

#[entry]
fn main() -> ! {
    // SAFETY: never executed, see module docs
    let regs = unsafe { MmioRegisters::new() };
    let mut clock = Clock::new(regs, ClockMode::Mhz80To88, true);

    let mut t0 = clock.clock_counter();
    let mut slow = false;

    loop {
        clock.udelay(10);

        if clock.is_after_msecs(t0, PERIOD_MS) {
            // Exercise the mode switch; the rate is re-derived each time
            let mode = if slow {
                ClockMode::Mhz40To44
            } else {
                ClockMode::Mhz80To88
            };
            clock.clock_set(mode, true);
            slow = !slow;

            let deadline = clock.deadline_msecs(1);
            while !deadline.has_elapsed(&mut clock) {
                cortex_m::asm::nop();
            }

            clock.delay(1);
            t0 = clock.clock_counter();
        }
    }
}
