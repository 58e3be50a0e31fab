//! Default watchface

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Point, Size},
    pixelcolor::Rgb565,
    primitives::Rectangle,
};
use embedded_text::alignment::HorizontalAlignment;

use super::{
    clock::{self, DisplayTime, DATE_CAPACITY, TIME_CAPACITY},
    layer::{BitmapLayer, CaptionLayer, CompositingMode, TextLayer},
    WatchFace, WatchFaceState, LCD_H, LCD_W,
};
use crate::{
    resources::{Bitmap, Font, ResourceId, ResourceStore},
    Error,
};

const CAPTION: &str = "codes <3 chuan";

/// Yellow
const TEXT_COLOR: Rgb565 = Rgb565::new(31, 63, 0);
/// Rich brilliant lavender
const CAPTION_COLOR: Rgb565 = Rgb565::new(31, 42, 31);
/// Chrome yellow
const LOGO_COLOR: Rgb565 = Rgb565::new(31, 42, 0);

/// Top edge of the caption band
const CAPTION_TOP: u32 = 221;

/// Resources held between load and unload
struct Assets {
    logo: Bitmap,
    time_font: Font,
    caption_font: Font,
}

/// Basic default watchface
pub struct DefaultWatchface {
    assets: Assets,
    /// Logo behind everything else
    background_layer: BitmapLayer,
    /// Time label
    time_label: TextLayer<TIME_CAPACITY>,
    /// Date label
    date_label: TextLayer<DATE_CAPACITY>,
    caption_layer: CaptionLayer,
}

impl DefaultWatchface {
    pub fn time_text(&self) -> &str {
        self.time_label.text()
    }

    pub fn date_text(&self) -> &str {
        self.date_label.text()
    }

    pub fn caption(&self) -> &'static str {
        self.caption_layer.text()
    }
}

/// Acquire the logo and both fonts, giving back whatever was acquired if a
/// later asset is missing
fn acquire<R: ResourceStore>(resources: &mut R) -> Result<Assets, Error> {
    let logo = resources.load_bitmap(ResourceId::BackgroundLogo)?;

    let time_font = match resources.load_font(ResourceId::TimeFont) {
        Ok(font) => font,
        Err(err) => {
            resources.unload_bitmap(logo);
            return Err(err);
        }
    };

    let caption_font = match resources.load_font(ResourceId::CaptionFont) {
        Ok(font) => font,
        Err(err) => {
            resources.unload_font(time_font);
            resources.unload_bitmap(logo);
            return Err(err);
        }
    };

    Ok(Assets {
        logo,
        time_font,
        caption_font,
    })
}

/// Text layer styled like the rest of the face
fn label<const N: usize>(bounds: Rectangle) -> TextLayer<N> {
    let mut layer = TextLayer::new(bounds);
    layer.set_background_color(None);
    layer.set_text_color(TEXT_COLOR);
    layer.set_alignment(HorizontalAlignment::Center);
    layer
}

impl WatchFace for DefaultWatchface {
    fn load<R: ResourceStore>(resources: &mut R, state: &WatchFaceState) -> Result<Self, Error> {
        let assets = acquire(resources)?;
        let bounds = Rectangle::new(Point::zero(), Size::new(LCD_W, LCD_H));

        let mut background_layer = BitmapLayer::new(bounds, LOGO_COLOR);
        background_layer.set_compositing_mode(CompositingMode::Set);

        let mut face = Self {
            assets,
            background_layer,
            time_label: label(Rectangle::new(Point::new(0, 8), Size::new(LCD_W, 60))),
            date_label: label(Rectangle::new(Point::new(0, 171), Size::new(LCD_W, 40))),
            caption_layer: CaptionLayer::new(bounds, CAPTION, CAPTION_COLOR, CAPTION_TOP),
        };

        // Show the time right away instead of waiting for the first tick
        if let Err(err) = face.update(state) {
            face.unload(resources);
            return Err(err);
        }
        Ok(face)
    }

    fn update(&mut self, state: &WatchFaceState) -> Result<(), Error> {
        let time = DisplayTime::from(&state.time);
        self.time_label
            .set_text(|buf| clock::format_time(&time, state.clock_style, buf))?;
        self.date_label
            .set_text(|buf| clock::format_date(&time, &state.weekday_names, buf))?;
        Ok(())
    }

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.background_layer.draw(&self.assets.logo, target)?;
        self.time_label.draw(&self.assets.time_font, target)?;
        self.date_label.draw(&self.assets.time_font, target)?;
        self.caption_layer.draw(&self.assets.caption_font, target)
    }

    fn unload<R: ResourceStore>(self, resources: &mut R) {
        let Assets {
            logo,
            time_font,
            caption_font,
        } = self.assets;
        resources.unload_font(caption_font);
        resources.unload_font(time_font);
        resources.unload_bitmap(logo);
    }
}
