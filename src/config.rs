//! Register map configuration for the clock core.
//!
//! The `ClockConfig` trait carries register addresses and field layouts as
//! associated consts, so a board with a relocated timer block only needs a
//! new zero-size config type. No runtime cost.

/// Register map and field layout used by [`Clock`](crate::Clock).
///
/// All values are const. `Ar9170Config` is the map of the AR9170 USB WLAN
/// chip and the default for every generic parameter in this crate.
pub trait ClockConfig {
    /// Lower 16 bits of the free-running tick counter
    const CLOCK_LOW: u32;

    /// Upper 16 bits of the free-running tick counter
    const CLOCK_HIGH: u32;

    /// Clock source/multiplier select register
    const CLOCK_SEL: u32;

    /// PLL ADDAC configuration register
    const PLL_ADDAC: u32;

    /// Mask of the ADDAC divider field inside `PLL_ADDAC`
    const PLL_ADDAC_DIV_MASK: u32;

    /// Bit position of the ADDAC divider field
    const PLL_ADDAC_DIV_SHIFT: u32;

    /// Selector bits OR-ed with the mode when the clock is switched on
    const CLOCK_SEL_ON: u32;

    /// Selector bits OR-ed with the mode when the clock is switched off
    const CLOCK_SEL_OFF: u32;
}

/// AR9170 register map.
///
/// - Timer block at `0x1c3000` (CLOCK_LOW `+0x20`, CLOCK_HIGH `+0x24`)
/// - Power block at `0x1d4000` (CLOCK_SEL `+0x08`, PLL_ADDAC `+0x14`)
/// - ADDAC divider: bits 2..=11 of PLL_ADDAC
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ar9170Config;

impl ClockConfig for Ar9170Config {
    const CLOCK_LOW: u32 = 0x1c_3020;
    const CLOCK_HIGH: u32 = 0x1c_3024;
    const CLOCK_SEL: u32 = 0x1d_4008;
    const PLL_ADDAC: u32 = 0x1d_4014;
    const PLL_ADDAC_DIV_MASK: u32 = 0xffc;
    const PLL_ADDAC_DIV_SHIFT: u32 = 2;
    const CLOCK_SEL_ON: u32 = 0x70;
    const CLOCK_SEL_OFF: u32 = 0x600;
}

/// PLL_ADDAC value the firmware programs for the 2.4GHz band (88MHz PLL).
pub const PLL_ADDAC_88MHZ: u32 = 0x5163;

/// PLL_ADDAC value the firmware programs for the 5GHz band (80MHz PLL).
pub const PLL_ADDAC_80MHZ: u32 = 0x5143;

/// Extract the ADDAC divider field from a raw PLL_ADDAC value.
pub const fn addac_divider<C: ClockConfig>(pll_addac: u32) -> u32 {
    (pll_addac & C::PLL_ADDAC_DIV_MASK) >> C::PLL_ADDAC_DIV_SHIFT
}
