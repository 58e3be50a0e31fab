//! Watchface errors

use crate::resources::ResourceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A bundled asset could not be found
    MissingResource(ResourceId),
    /// Load received while the window is already loaded
    AlreadyLoaded,
    /// Unload received while the window is not loaded
    NotLoaded,
    /// A label could not be written into its buffer
    Format,
}
