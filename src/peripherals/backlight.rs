//! Backlight control
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/backlight.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_14, P0_22, P0_23},
};

/// The three active-low backlight pins
pub struct BacklightPins<'a> {
    /// Pin P0.14: 2.2 kΩ
    low: Output<'a, P0_14>,
    /// Pin P0.22: 100 Ω
    mid: Output<'a, P0_22>,
    /// Pin P0.23: 30 Ω
    high: Output<'a, P0_23>,
}

impl<'a> BacklightPins<'a> {
    /// Configure backlight pins on boot
    pub fn init(low: Output<'a, P0_14>, mid: Output<'a, P0_22>, high: Output<'a, P0_23>) -> Self {
        Self { low, mid, high }
    }
}

/// Control the backlight.
///
/// Each pin toggles a FET that powers the backlight through a resistor.
/// Through combinations of these pins, 7 brightness levels (+ off) can be
/// configured.
pub struct Backlight<'a> {
    pins: BacklightPins<'a>,
}

impl<'a> Backlight<'a> {
    /// Take over the pins with the backlight switched off
    pub fn init(pins: BacklightPins<'a>) -> Self {
        let mut backlight = Self { pins };
        backlight.off();
        backlight
    }

    /// Set the brightness level between 0 (off) and 7 (max brightness).
    pub fn set(&mut self, brightness: u8) -> Result<(), Error> {
        if brightness > 7 {
            return Err(Error::OutOfBounds);
        }
        defmt::debug!("Setting backlight brightness to {}", brightness);

        if brightness & 0x01 > 0 {
            self.pins.low.set_low();
        } else {
            self.pins.low.set_high();
        }
        if brightness & 0x02 > 0 {
            self.pins.mid.set_low();
        } else {
            self.pins.mid.set_high();
        }
        if brightness & 0x04 > 0 {
            self.pins.high.set_low();
        } else {
            self.pins.high.set_high();
        }
        Ok(())
    }

    /// Turn off the backlight.
    pub fn off(&mut self) {
        self.pins.low.set_high();
        self.pins.mid.set_high();
        self.pins.high.set_high();
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    OutOfBounds,
}
