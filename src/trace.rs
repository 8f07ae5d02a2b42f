//! Diagnostics through the `log` facade.
//!
//! With the `log` feature disabled the macros expand to nothing, but their
//! arguments are still type-checked.

macro_rules! clock_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
        #[cfg(not(feature = "log"))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

macro_rules! clock_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
        #[cfg(not(feature = "log"))]
        {
            let _ = ::core::format_args!($($arg)*);
        }
    }};
}

pub(crate) use clock_debug;
pub(crate) use clock_warn;
