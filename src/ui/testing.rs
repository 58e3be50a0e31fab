//! In-memory display for tests

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb565,
    Pixel,
};

use super::{LCD_H, LCD_W};

/// Full-size `Rgb565` screen backed by a vector
pub struct Screen {
    pixels: Vec<Rgb565>,
}

impl Screen {
    pub fn filled(color: Rgb565) -> Self {
        Self {
            pixels: vec![color; (LCD_W * LCD_H) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb565 {
        self.pixels[(y * LCD_W + x) as usize]
    }

    /// Number of pixels with `color`
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == color).count()
    }
}

impl OriginDimensions for Screen {
    fn size(&self) -> Size {
        Size::new(LCD_W, LCD_H)
    }
}

impl DrawTarget for Screen {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..LCD_W as i32).contains(&point.x) && (0..LCD_H as i32).contains(&point.y) {
                self.pixels[(point.y as u32 * LCD_W + point.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}
