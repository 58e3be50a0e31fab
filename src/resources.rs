//! Bundled assets
//!
//! Assets are addressed by a fixed [`ResourceId`] and handed out as handles
//! that must be given back to the store exactly once. Handles are neither
//! `Clone` nor `Copy`, so giving one back consumes it.

use embedded_graphics::{
    geometry::{OriginDimensions, Size},
    image::ImageRaw,
    mono_font::{ascii::FONT_6X10, MonoFont},
    pixelcolor::BinaryColor,
};
use profont::PROFONT_24_POINT;

use crate::Error;

/// Width of the bundled logo in pixels
const LOGO_WIDTH: u32 = 120;

/// 1 bpp logo, rows padded to whole bytes
static LOGO_DATA: &[u8] = include_bytes!("../assets/uw_logo.raw");

/// Identifiers of the bundled assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceId {
    /// Background logo bitmap
    BackgroundLogo,
    /// Font used for the time and date labels
    TimeFont,
    /// Font used for the caption
    CaptionFont,
}

/// Handle to a loaded bitmap
#[derive(Debug)]
pub struct Bitmap {
    id: ResourceId,
    image: ImageRaw<'static, BinaryColor>,
}

impl Bitmap {
    pub fn new(id: ResourceId, image: ImageRaw<'static, BinaryColor>) -> Self {
        Self { id, image }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn image(&self) -> &ImageRaw<'static, BinaryColor> {
        &self.image
    }

    /// Bitmap dimensions in pixels
    pub fn size(&self) -> Size {
        self.image.size()
    }
}

/// Handle to a loaded font
#[derive(Debug)]
pub struct Font {
    id: ResourceId,
    font: &'static MonoFont<'static>,
}

impl Font {
    pub fn new(id: ResourceId, font: &'static MonoFont<'static>) -> Self {
        Self { id, font }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn mono_font(&self) -> &'static MonoFont<'static> {
        self.font
    }
}

/// Source of bitmaps and fonts
///
/// Every successful `load_*` must be matched by exactly one `unload_*` of
/// the returned handle.
pub trait ResourceStore {
    /// Load a bitmap
    fn load_bitmap(&mut self, id: ResourceId) -> Result<Bitmap, Error>;

    /// Give a bitmap back to the store
    fn unload_bitmap(&mut self, bitmap: Bitmap);

    /// Load a font
    fn load_font(&mut self, id: ResourceId) -> Result<Font, Error>;

    /// Give a font back to the store
    fn unload_font(&mut self, font: Font);
}

/// Assets compiled into the firmware image
#[derive(Debug, Default)]
pub struct BundledResources {
    /// Handles currently handed out
    live: usize,
}

impl BundledResources {
    pub const fn new() -> Self {
        Self { live: 0 }
    }

    /// Number of handles loaded and not yet given back
    pub fn live_handles(&self) -> usize {
        self.live
    }

    fn acquired(&mut self, id: ResourceId) {
        self.live += 1;
        #[cfg(feature = "defmt")]
        defmt::debug!("Loaded {} ({} live)", id, self.live);
        #[cfg(not(feature = "defmt"))]
        let _ = id;
    }

    fn released(&mut self, id: ResourceId) {
        self.live = self.live.saturating_sub(1);
        #[cfg(feature = "defmt")]
        defmt::debug!("Unloaded {} ({} live)", id, self.live);
        #[cfg(not(feature = "defmt"))]
        let _ = id;
    }
}

impl ResourceStore for BundledResources {
    fn load_bitmap(&mut self, id: ResourceId) -> Result<Bitmap, Error> {
        let image = match id {
            ResourceId::BackgroundLogo => ImageRaw::new(LOGO_DATA, LOGO_WIDTH),
            _ => return Err(Error::MissingResource(id)),
        };
        self.acquired(id);
        Ok(Bitmap::new(id, image))
    }

    fn unload_bitmap(&mut self, bitmap: Bitmap) {
        self.released(bitmap.id());
    }

    fn load_font(&mut self, id: ResourceId) -> Result<Font, Error> {
        let font = match id {
            ResourceId::TimeFont => &PROFONT_24_POINT,
            ResourceId::CaptionFont => &FONT_6X10,
            _ => return Err(Error::MissingResource(id)),
        };
        self.acquired(id);
        Ok(Font::new(id, font))
    }

    fn unload_font(&mut self, font: Font) {
        self.released(font.id());
    }
}
