#![warn(missing_docs)]

//! Procedural icons for editor tooling: small, crisp, flat-color glyphs
//! rasterized at runtime instead of shipped as image assets.

pub use nalgebra as math;
#[cfg(feature = "vello")]
pub use vello::peniko as color;

pub use npicon_raster as raster;
pub use npicon_services as services;

/// A "prelude" for users of npicon.
///
/// Importing this module brings into scope the types needed to request icons
/// and to author new glyphs.
///
/// ```rust
/// use npicon::prelude::*;
///
/// let mut icons = IconService::builtin(32);
/// let bitmap: Bitmap = icons.get(IconId::Play);
/// assert_eq!(bitmap.dimensions(), (32, 32));
/// ```
pub mod prelude {
    // Rasterization
    pub use crate::raster::canvas::{Bitmap, PixelCanvas};
    pub use crate::raster::color::Color;
    pub use crate::raster::primitives;

    // Icon service
    pub use crate::services::icon::{
        IconDescriptor, IconId, IconService, IconState, ShapeRegistry,
    };
    pub use crate::services::settings::{Config, SettingsRegistry};

    // Math
    pub use nalgebra::Point2;
}
