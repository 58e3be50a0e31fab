//! General system configuration

use embassy_nrf::{
    config::{Config, Debug, HfclkSource, LfclkSource},
    interrupt::Priority,
};
use pinetime_watchface::WeekdayNames;

/// Offset of local time from UTC in seconds
pub const TIMEZONE: i32 = 3_600;

/// Show the time on a 24-hour dial
pub const CLOCK_24H: bool = true;

/// Weekday abbreviations of the date label
pub const WEEKDAY_NAMES: WeekdayNames = WeekdayNames::ENGLISH;

/// Backlight level at boot (0-7)
pub const BACKLIGHT_LEVEL: u8 = 2;

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // Set high-frequency and low-frequency clock sources to external
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        config.dcdc.reg1 = true;

        config.gpiote_interrupt_priority = Priority::P2;
        config.time_interrupt_priority = Priority::P2;

        // Allow debugging
        config.debug = Debug::Allowed;

        config
    }
}
