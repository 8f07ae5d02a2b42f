//! Register access abstraction for the clock core.
//!
//! The `RegisterIo` trait is the only way this crate touches hardware. Firmware
//! uses [`MmioRegisters`]; host tests use [`SimRegisters`](crate::sim::SimRegisters)
//! or their own scripted model.

/// Platform-agnostic 32-bit register access.
///
/// Reads and writes are assumed to always succeed with fixed latency.
/// `get` takes `&mut self` because reading the tick counter observes a
/// continuously advancing value; simulated models advance on read.
pub trait RegisterIo {
    /// Read the register at `addr`.
    fn get(&mut self, addr: u32) -> u32;

    /// Write `value` to the register at `addr`.
    fn set(&mut self, addr: u32, value: u32);
}

impl<R: RegisterIo + ?Sized> RegisterIo for &mut R {
    fn get(&mut self, addr: u32) -> u32 {
        (**self).get(addr)
    }

    fn set(&mut self, addr: u32, value: u32) {
        (**self).set(addr, value)
    }
}

/// Memory-mapped register access through volatile pointers.
///
/// Addresses passed to `get`/`set` are used directly as physical addresses.
#[derive(Debug)]
pub struct MmioRegisters {
    _private: (),
}

impl MmioRegisters {
    /// Create the MMIO accessor.
    ///
    /// # Safety
    ///
    /// Every address handed to `get`/`set` must be a valid, aligned device
    /// register on the running target. The firmware is single-threaded, so
    /// holding more than one accessor cannot race, but each one can still
    /// reconfigure the CPU clock.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterIo for MmioRegisters {
    #[inline]
    fn get(&mut self, addr: u32) -> u32 {
        // SAFETY: validity of `addr` is the contract of `MmioRegisters::new`
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }

    #[inline]
    fn set(&mut self, addr: u32, value: u32) {
        // SAFETY: validity of `addr` is the contract of `MmioRegisters::new`
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
    }
}
