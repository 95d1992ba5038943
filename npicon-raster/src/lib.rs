// SPDX-License-Identifier: LGPL-3.0-only
#![warn(missing_docs)]

//! # NPICON Raster
//!
//! A minimal software rasterizer for small, crisp, flat-color icon glyphs.
//!
//! - **[PixelCanvas](canvas::PixelCanvas)**: mutable square RGBA buffer with clipped writes
//! - **[Bitmap](canvas::Bitmap)**: the immutable, shareable result of a rasterization
//! - **[Color](color::Color)**: 8-bit RGBA with clamped shade derivation
//! - **[primitives]**: rectangles, circles, rings, thick lines and triangles
//!
//! ```rust
//! use npicon_raster::prelude::*;
//!
//! let mut canvas = PixelCanvas::new(32);
//! filled_rect(&mut canvas, 4, 4, 20, 20, Color::BLACK);
//! let bitmap = canvas.into_bitmap();
//! assert_eq!(bitmap.painted_count(), 400);
//! ```

pub mod canvas;
pub mod color;
pub mod primitives;

pub use nalgebra::Point2;

/// Commonly used rasterization types and primitives.
pub mod prelude {
    pub use crate::canvas::{Bitmap, PixelCanvas};
    pub use crate::color::Color;
    pub use crate::primitives::*;
    pub use nalgebra::Point2;
}
