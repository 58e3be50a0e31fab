//! Caption watchface for the PineTime
//!
//! Shows the time, the date, a background logo and a small caption. The
//! watchface itself is independent of the hardware: it draws onto any
//! `embedded_graphics` target with `Rgb565` pixels, which keeps it testable
//! on the host. The firmware binary (`firmware` feature) wires it to the
//! ST7789 display and the system clock.

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod resources;
pub mod ui;

pub use error::Error;
pub use resources::{BundledResources, ResourceId, ResourceStore};
pub use ui::{
    clock::{ClockStyle, DisplayTime, WeekdayNames},
    default_watchface::DefaultWatchface,
    window::{Event, Window},
    WatchFace, WatchFaceState,
};
