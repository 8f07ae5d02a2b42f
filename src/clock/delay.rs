//! Busy-wait delays.
//!
//! Both loops spin the only execution context until the deadline is reached.
//! They do not service the hardware watchdog, and they never finish if the
//! requested time exceeds the counter wrap period (~97s at 44, ~107s at 40).
//! Keep single calls well inside the watchdog timeout.

use crate::config::ClockConfig;
use crate::io::RegisterIo;

use super::Clock;

impl<R: RegisterIo, C: ClockConfig> Clock<R, C> {
    /// Spin until `msec * ticks_per_msec` units of 1000 ticks have passed.
    pub fn delay(&mut self, msec: u32) {
        let deadline = self.deadline_msecs(msec);
        while !deadline.has_elapsed(self) {
            core::hint::spin_loop();
        }
    }

    /// Spin until `usec * ticks_per_msec` raw ticks have passed.
    ///
    /// Tick granularity: the unit is only a microsecond when the counter
    /// runs at `ticks_per_msec` MHz. Callers must account for the scale.
    pub fn udelay(&mut self, usec: u32) {
        let deadline = self.deadline_ticks(usec);
        while !deadline.has_elapsed(self) {
            core::hint::spin_loop();
        }
    }

    /// Like [`Clock::delay`], yielding to the executor between polls.
    #[cfg(feature = "async")]
    pub async fn delay_async(&mut self, msec: u32) {
        let deadline = self.deadline_msecs(msec);
        while !deadline.has_elapsed(self) {
            YieldNow::new().await;
        }
    }

    /// Like [`Clock::udelay`], yielding to the executor between polls.
    #[cfg(feature = "async")]
    pub async fn udelay_async(&mut self, usec: u32) {
        let deadline = self.deadline_ticks(usec);
        while !deadline.has_elapsed(self) {
            YieldNow::new().await;
        }
    }
}

/// Future that is pending exactly once.
#[cfg(feature = "async")]
#[derive(Debug)]
struct YieldNow {
    yielded: bool,
}

#[cfg(feature = "async")]
impl YieldNow {
    fn new() -> Self {
        Self { yielded: false }
    }
}

#[cfg(feature = "async")]
impl core::future::Future for YieldNow {
    type Output = ();

    fn poll(
        mut self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<()> {
        if self.yielded {
            core::task::Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            core::task::Poll::Pending
        }
    }
}
