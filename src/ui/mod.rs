//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::{resources::ResourceStore, Error};

pub mod clock;
pub mod default_watchface;
pub mod layer;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

use clock::{ClockStyle, WeekdayNames};

pub const LCD_W: u32 = 240;
pub const LCD_H: u32 = 240;

/// Indigo
pub const BACKGROUND_COLOR: Rgb565 = Rgb565::new(10, 0, 21);

pub trait WatchFace: Sized {
    /// Acquire resources, build the layers and show `state`
    fn load<R: ResourceStore>(resources: &mut R, state: &WatchFaceState) -> Result<Self, Error>;

    /// Update watchface with state
    fn update(&mut self, state: &WatchFaceState) -> Result<(), Error>;

    /// Draw all layers, back to front
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;

    /// Give every acquired resource back
    fn unload<R: ResourceStore>(self, resources: &mut R);
}

/// State for the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchFaceState {
    pub time: NaiveDateTime,
    /// Host preference, read on every update
    pub clock_style: ClockStyle,
    pub weekday_names: WeekdayNames,
}

impl WatchFaceState {
    pub fn new(time: NaiveDateTime, clock_style: ClockStyle) -> Self {
        Self {
            time,
            clock_style,
            weekday_names: WeekdayNames::ENGLISH,
        }
    }

    /// Use `names` for the weekday in the date label
    pub fn with_weekday_names(mut self, names: WeekdayNames) -> Self {
        self.weekday_names = names;
        self
    }
}
