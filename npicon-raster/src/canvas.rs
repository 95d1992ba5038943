// SPDX-License-Identifier: LGPL-3.0-only

//! Square RGBA working surface and the immutable bitmap it turns into.
//!
//! The origin is the top-left corner: `x` grows to the right and `y` grows
//! downwards, so row `0` is the first row of the exported buffer. Writes
//! outside the canvas are dropped silently, which lets primitives draw shapes
//! that overhang the edges without clipping them first.

use std::fmt;
use std::sync::Arc;

use crate::color::Color;

/// Bytes per pixel in the RGBA8 layout.
pub const BYTES_PER_PIXEL: usize = 4;

/// A mutable `size × size` RGBA pixel buffer, row-major.
///
/// Created per rasterization request and owned by it until converted into a
/// [Bitmap].
#[derive(Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    size: u32,
    pixels: Vec<Color>,
}

impl PixelCanvas {
    /// Create a fully transparent canvas.
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize;
        Self {
            size,
            pixels: vec![Color::TRANSPARENT; len],
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let n = self.size as i64;
        let (x, y) = (x as i64, y as i64);
        if x < 0 || y < 0 || x >= n || y >= n {
            return None;
        }
        Some((y * n + x) as usize)
    }

    /// Write a pixel. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Read a pixel. Out-of-range coordinates read as [Color::TRANSPARENT].
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.index(x, y)
            .map(|i| self.pixels[i])
            .unwrap_or(Color::TRANSPARENT)
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Number of pixels whose alpha is non-zero.
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|c| !c.is_transparent()).count()
    }

    /// Coordinates of every non-transparent pixel, in row-major order.
    pub fn painted_points(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let n = self.size as usize;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_transparent())
            .map(move |(i, _)| ((i % n) as i32, (i / n) as i32))
    }

    /// Copy the current contents into an immutable [Bitmap].
    pub fn export(&self) -> Bitmap {
        Bitmap::from_pixels(self.size, &self.pixels)
    }

    /// Finish the canvas and hand its contents over as a [Bitmap].
    pub fn into_bitmap(self) -> Bitmap {
        self.export()
    }
}

impl fmt::Debug for PixelCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelCanvas")
            .field("size", &self.size)
            .field("painted", &self.painted_count())
            .finish()
    }
}

/// A finished icon: `size × size` RGBA8, row-major, top row first.
///
/// Bitmaps are immutable and share their storage, so cloning one is cheap.
/// Equality compares pixel content.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    size: u32,
    data: Arc<[u8]>,
}

impl Bitmap {
    fn from_pixels(size: u32, pixels: &[Color]) -> Self {
        let data: Vec<u8> = pixels.iter().flat_map(|c| c.to_array()).collect();
        Self {
            size,
            data: data.into(),
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Width and height (always equal).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.size, self.size)
    }

    /// Raw RGBA8 bytes, `size * size * 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Read a pixel. Out-of-range coordinates read as [Color::TRANSPARENT].
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        let n = self.size as i64;
        let (x, y) = (x as i64, y as i64);
        if x < 0 || y < 0 || x >= n || y >= n {
            return Color::TRANSPARENT;
        }
        let i = (y * n + x) as usize * BYTES_PER_PIXEL;
        Color::rgba(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Number of pixels whose alpha is non-zero.
    pub fn painted_count(&self) -> usize {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| px[3] != 0)
            .count()
    }

    /// Returns `true` if both bitmaps share the same allocation.
    pub fn ptr_eq(&self, other: &Bitmap) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("size", &self.size)
            .field("painted", &self.painted_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = PixelCanvas::new(16);
        assert_eq!(canvas.size(), 16);
        assert_eq!(canvas.painted_count(), 0);
        assert_eq!(canvas.pixel(3, 3), Color::TRANSPARENT);
    }

    #[test]
    fn test_set_then_get_every_in_bounds_pixel() {
        let mut canvas = PixelCanvas::new(8);
        for y in 0..8 {
            for x in 0..8 {
                let c = Color::rgba(x as u8 * 10, y as u8 * 10, 7, 200);
                canvas.set_pixel(x, y, c);
                assert_eq!(canvas.pixel(x, y), c);
            }
        }
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut canvas = PixelCanvas::new(4);
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (i32::MAX, i32::MIN)] {
            canvas.set_pixel(x, y, Color::WHITE);
            assert_eq!(canvas.pixel(x, y), Color::TRANSPARENT);
        }
        assert_eq!(canvas.painted_count(), 0);
    }

    #[test]
    fn test_bitmap_layout_is_row_major_top_left() {
        let mut canvas = PixelCanvas::new(3);
        canvas.set_pixel(2, 0, Color::rgb(1, 2, 3));
        canvas.set_pixel(0, 1, Color::rgba(4, 5, 6, 7));
        let bitmap = canvas.into_bitmap();

        let bytes = bitmap.as_bytes();
        assert_eq!(bytes.len(), 3 * 3 * BYTES_PER_PIXEL);
        assert_eq!(&bytes[8..12], &[1, 2, 3, 255]);
        assert_eq!(&bytes[12..16], &[4, 5, 6, 7]);
        assert_eq!(bitmap.pixel(0, 1), Color::rgba(4, 5, 6, 7));
        assert_eq!(bitmap.painted_count(), 2);
    }

    #[test]
    fn test_export_is_a_snapshot() {
        let mut canvas = PixelCanvas::new(4);
        canvas.set_pixel(1, 1, Color::BLACK);
        let before = canvas.export();
        canvas.set_pixel(2, 2, Color::BLACK);

        assert_eq!(before.painted_count(), 1);
        assert_eq!(canvas.export().painted_count(), 2);
    }

    #[test]
    fn test_painted_points() {
        let mut canvas = PixelCanvas::new(5);
        canvas.set_pixel(4, 0, Color::WHITE);
        canvas.set_pixel(1, 3, Color::WHITE);
        let points: Vec<_> = canvas.painted_points().collect();
        assert_eq!(points, vec![(4, 0), (1, 3)]);
    }
}
