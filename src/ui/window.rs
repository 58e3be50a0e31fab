//! Window lifecycle
//!
//! The window is either unloaded or holds a loaded watchface. Host events
//! move it between the two states; a tick only updates a loaded face and
//! marks the window dirty so the host knows to redraw it.

use core::mem;

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use super::{WatchFace, WatchFaceState, BACKGROUND_COLOR};
use crate::{resources::ResourceStore, Error};

/// Events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The window is pushed on screen
    Load(WatchFaceState),
    /// The window is torn down
    Unload,
    /// A minute has passed
    Tick(WatchFaceState),
}

enum Lifecycle<W> {
    Unloaded,
    Loaded(W),
}

pub struct Window<W> {
    lifecycle: Lifecycle<W>,
    background: Rgb565,
    /// Set when the screen no longer matches the window
    dirty: bool,
}

impl<W: WatchFace> Default for Window<W> {
    fn default() -> Self {
        Self::new(BACKGROUND_COLOR)
    }
}

impl<W: WatchFace> Window<W> {
    pub fn new(background: Rgb565) -> Self {
        Self {
            lifecycle: Lifecycle::Unloaded,
            background,
            dirty: true,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Loaded(_))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The loaded watchface, if any
    pub fn face(&self) -> Option<&W> {
        match &self.lifecycle {
            Lifecycle::Loaded(face) => Some(face),
            Lifecycle::Unloaded => None,
        }
    }

    /// Apply a host event
    pub fn handle<R: ResourceStore>(&mut self, event: Event, resources: &mut R) -> Result<(), Error> {
        match event {
            Event::Load(state) => {
                if self.is_loaded() {
                    return Err(Error::AlreadyLoaded);
                }
                self.lifecycle = Lifecycle::Loaded(W::load(resources, &state)?);
                #[cfg(feature = "defmt")]
                defmt::info!("Window loaded");
            }
            Event::Unload => match mem::replace(&mut self.lifecycle, Lifecycle::Unloaded) {
                Lifecycle::Loaded(face) => {
                    face.unload(resources);
                    #[cfg(feature = "defmt")]
                    defmt::info!("Window unloaded");
                }
                Lifecycle::Unloaded => return Err(Error::NotLoaded),
            },
            Event::Tick(state) => match &mut self.lifecycle {
                Lifecycle::Loaded(face) => face.update(&state)?,
                Lifecycle::Unloaded => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Tick ignored, window not loaded");
                    return Ok(());
                }
            },
        }
        self.dirty = true;
        Ok(())
    }

    /// Clear to the background color and draw the loaded face on top
    pub fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(self.background)?;
        if let Lifecycle::Loaded(face) = &self.lifecycle {
            face.draw(target)?;
        }
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        resources::BundledResources,
        ui::{clock::ClockStyle, default_watchface::DefaultWatchface, testing::Screen},
    };
    use chrono::NaiveDate;

    fn state(day: u32, hour: u32, minute: u32) -> WatchFaceState {
        let time = NaiveDate::from_ymd_opt(2024, 10, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        WatchFaceState::new(time, ClockStyle::TwentyFourHour)
    }

    #[test]
    fn load_twice_is_rejected() {
        let mut store = BundledResources::new();
        let mut window: Window<DefaultWatchface> = Window::default();

        window.handle(Event::Load(state(14, 9, 0)), &mut store).unwrap();
        assert_eq!(
            window.handle(Event::Load(state(14, 9, 1)), &mut store),
            Err(Error::AlreadyLoaded)
        );
        assert_eq!(store.live_handles(), 3);

        window.handle(Event::Unload, &mut store).unwrap();
        assert_eq!(store.live_handles(), 0);
    }

    #[test]
    fn unload_twice_is_rejected() {
        let mut store = BundledResources::new();
        let mut window: Window<DefaultWatchface> = Window::default();

        assert_eq!(window.handle(Event::Unload, &mut store), Err(Error::NotLoaded));
        window.handle(Event::Load(state(14, 9, 0)), &mut store).unwrap();
        window.handle(Event::Unload, &mut store).unwrap();
        assert_eq!(window.handle(Event::Unload, &mut store), Err(Error::NotLoaded));
        assert_eq!(store.live_handles(), 0);
    }

    #[test]
    fn tick_updates_loaded_face() {
        let mut store = BundledResources::new();
        let mut window: Window<DefaultWatchface> = Window::default();

        window.handle(Event::Load(state(14, 9, 0)), &mut store).unwrap();
        window.draw(&mut Screen::filled(BACKGROUND_COLOR)).unwrap();
        assert!(!window.is_dirty());

        window.handle(Event::Tick(state(14, 9, 1)), &mut store).unwrap();
        assert!(window.is_dirty());
        let face = window.face().unwrap();
        assert_eq!(face.time_text(), "09:01");
        assert_eq!(face.date_text(), "Mon14");

        window.handle(Event::Unload, &mut store).unwrap();
    }

    #[test]
    fn tick_while_unloaded_is_ignored() {
        let mut store = BundledResources::new();
        let mut window: Window<DefaultWatchface> = Window::default();
        window.draw(&mut Screen::filled(BACKGROUND_COLOR)).unwrap();

        window.handle(Event::Tick(state(14, 9, 1)), &mut store).unwrap();
        assert!(!window.is_loaded());
        assert!(!window.is_dirty());
        assert_eq!(store.live_handles(), 0);
    }

    #[test]
    fn unloaded_window_is_background_only() {
        let mut window: Window<DefaultWatchface> = Window::default();
        let mut screen = Screen::filled(Rgb565::new(0, 0, 0));

        window.draw(&mut screen).unwrap();
        assert_eq!(screen.count(BACKGROUND_COLOR), 240 * 240);
    }
}
