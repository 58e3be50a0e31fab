//! Drawable layers of the watchface
//!
//! Layers only keep geometry, colors and text. Bitmaps and fonts are owned
//! by the watchface and lent to the layer for each draw, so a resource
//! cannot be given back while a layer still draws with it.

use embedded_graphics::{
    draw_target::{DrawTarget, DrawTargetExt},
    geometry::{Dimensions, Point, Size},
    image::Image,
    mono_font::MonoTextStyle,
    pixelcolor::{BinaryColor, Rgb565},
    primitives::{Primitive, PrimitiveStyle, Rectangle},
    Drawable, Pixel,
};
use embedded_text::{
    alignment::HorizontalAlignment,
    style::{HeightMode, TextBoxStyleBuilder, VerticalOverdraw},
    TextBox,
};

use crate::{
    resources::{Bitmap, Font},
    Error,
};

/// How a 1 bpp bitmap is combined with what is already on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CompositingMode {
    /// Set pixels get the foreground color, unset pixels the background color
    Assign,
    /// Only set pixels are drawn
    Set,
}

/// Layer showing a bitmap centered in its bounds
pub struct BitmapLayer {
    bounds: Rectangle,
    mode: CompositingMode,
    foreground: Rgb565,
    /// Color of unset pixels in `Assign` mode
    background: Rgb565,
}

impl BitmapLayer {
    pub fn new(bounds: Rectangle, foreground: Rgb565) -> Self {
        Self {
            bounds,
            mode: CompositingMode::Assign,
            foreground,
            background: Rgb565::new(0, 0, 0),
        }
    }

    pub fn set_compositing_mode(&mut self, mode: CompositingMode) {
        self.mode = mode;
    }

    pub fn draw<D>(&self, bitmap: &Bitmap, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let size = bitmap.size();
        let offset = Point::new(
            (self.bounds.size.width as i32 - size.width as i32) / 2,
            (self.bounds.size.height as i32 - size.height as i32) / 2,
        );

        let mut clipped = target.clipped(&self.bounds);
        let mut composite = Composite {
            target: &mut clipped,
            mode: self.mode,
            foreground: self.foreground,
            background: self.background,
        };
        Image::new(bitmap.image(), self.bounds.top_left + offset).draw(&mut composite)
    }
}

/// Draw target mapping 1 bpp pixels onto an `Rgb565` target
struct Composite<'a, D> {
    target: &'a mut D,
    mode: CompositingMode,
    foreground: Rgb565,
    background: Rgb565,
}

impl<D> Dimensions for Composite<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D> DrawTarget for Composite<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (mode, foreground, background) = (self.mode, self.foreground, self.background);
        self.target
            .draw_iter(pixels.into_iter().filter_map(move |Pixel(point, color)| {
                match (color, mode) {
                    (BinaryColor::On, _) => Some(Pixel(point, foreground)),
                    (BinaryColor::Off, CompositingMode::Assign) => Some(Pixel(point, background)),
                    (BinaryColor::Off, CompositingMode::Set) => None,
                }
            }))
    }
}

/// Layer showing a short text from a fixed-capacity buffer
pub struct TextLayer<const N: usize> {
    bounds: Rectangle,
    text_color: Rgb565,
    /// `None` leaves the pixels underneath visible
    background: Option<Rgb565>,
    alignment: HorizontalAlignment,
    str_buf: [u8; N],
    len: usize,
}

impl<const N: usize> TextLayer<N> {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            text_color: Rgb565::new(0, 0, 0),
            background: Some(Rgb565::new(31, 63, 31)),
            alignment: HorizontalAlignment::Left,
            str_buf: [0; N],
            len: 0,
        }
    }

    pub fn set_text_color(&mut self, color: Rgb565) {
        self.text_color = color;
    }

    pub fn set_background_color(&mut self, color: Option<Rgb565>) {
        self.background = color;
    }

    pub fn set_alignment(&mut self, alignment: HorizontalAlignment) {
        self.alignment = alignment;
    }

    /// Replace the text with whatever `write` puts into the buffer
    ///
    /// The previous text is kept if `write` fails.
    pub fn set_text<F>(&mut self, write: F) -> Result<(), Error>
    where
        F: for<'b> FnOnce(&'b mut [u8; N]) -> Result<&'b str, Error>,
    {
        let mut scratch = [0; N];
        let len = write(&mut scratch)?.len();
        self.str_buf = scratch;
        self.len = len;
        Ok(())
    }

    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or_default()
    }

    pub fn draw<D>(&self, font: &Font, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(background) = self.background {
            self.bounds
                .into_styled(PrimitiveStyle::with_fill(background))
                .draw(target)?;
        }

        let character_style = MonoTextStyle::new(font.mono_font(), self.text_color);
        let textbox_style = TextBoxStyleBuilder::new()
            .height_mode(HeightMode::Exact(VerticalOverdraw::Hidden))
            .alignment(self.alignment)
            .build();
        TextBox::with_textbox_style(self.text(), self.bounds, character_style, textbox_style)
            .draw(target)?;
        Ok(())
    }
}

/// Static text drawn centered and word wrapped in a band at the bottom of
/// its layer
pub struct CaptionLayer {
    bounds: Rectangle,
    text: &'static str,
    color: Rgb565,
    /// Distance from the top of the layer to the caption band
    top: u32,
}

impl CaptionLayer {
    pub fn new(bounds: Rectangle, text: &'static str, color: Rgb565, top: u32) -> Self {
        Self {
            bounds,
            text,
            color,
            top,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Reduced bounding box the caption is laid out in
    pub fn text_bounds(&self) -> Rectangle {
        let top = self.top.min(self.bounds.size.height);
        Rectangle::new(
            self.bounds.top_left + Point::new(0, top as i32),
            Size::new(self.bounds.size.width, self.bounds.size.height - top),
        )
    }

    pub fn draw<D>(&self, font: &Font, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let character_style = MonoTextStyle::new(font.mono_font(), self.color);
        let textbox_style = TextBoxStyleBuilder::new()
            .height_mode(HeightMode::Exact(VerticalOverdraw::Hidden))
            .alignment(HorizontalAlignment::Center)
            .build();
        TextBox::with_textbox_style(self.text, self.text_bounds(), character_style, textbox_style)
            .draw(target)?;
        Ok(())
    }
}
