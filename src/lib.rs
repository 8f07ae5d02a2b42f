//! # ar9170-clock
//!
//! Clock and timekeeping core for AR9170-class WLAN firmware, with zero heap
//! allocation and no scheduler requirements.
//!
//! **Key features:**
//! - **Tick counter** - 32-bit free-running counter from two 16-bit halves
//! - **Clock switch** - CPU clock mode selection with PLL-derived tick rate
//! - **Elapsed time** - Wraparound-safe threshold checks
//! - **Delays** - Busy-wait `delay`/`udelay`, plus non-blocking deadlines
//! - **Flexible I/O** - Register access through the `RegisterIo` trait
//!
//! ## Optional Features
//!
//! - `sim` - In-memory register model for host-side testing
//! - `async` - Delays that yield to a cooperative executor between polls
//! - `log` - Clock reconfiguration diagnostics through the `log` facade
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "sim")]
extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod io;
pub mod mode;

pub mod clock;

#[cfg(feature = "sim")]
pub mod sim;

mod trace;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Register access
pub use io::{MmioRegisters, RegisterIo};

// Configuration
pub use config::{Ar9170Config, ClockConfig};

// Error types
pub use error::ClockError;

// Clock types
pub use clock::{wrap_period_msecs, Clock, Deadline, DeadlineUnit};
pub use mode::ClockMode;

#[cfg(feature = "sim")]
pub use sim::SimRegisters;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
