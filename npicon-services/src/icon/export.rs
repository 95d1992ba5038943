//! Handing finished bitmaps to the outside world.
//!
//! PNG encoding goes through the `image` crate. With the `vello` feature a
//! bitmap can also become a `peniko` image handle for the host renderer.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use npicon_raster::canvas::Bitmap;

use crate::icon::error::IconError;

/// Convert a bitmap into an `image` buffer.
pub fn to_rgba_image(bitmap: &Bitmap) -> RgbaImage {
    let (width, height) = bitmap.dimensions();
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba(bitmap.pixel(x as i32, y as i32).to_array())
    })
}

/// Encode a bitmap as PNG bytes.
pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, IconError> {
    let mut bytes = Vec::new();
    to_rgba_image(bitmap).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write a bitmap to `path` as PNG.
pub fn save_png(bitmap: &Bitmap, path: impl AsRef<Path>) -> Result<(), IconError> {
    let path = path.as_ref();
    log::debug!("Writing {}px icon to {:?}", bitmap.size(), path);
    std::fs::write(path, encode_png(bitmap)?)?;
    Ok(())
}

/// Wrap a bitmap as straight-alpha RGBA8 image data for `vello`.
#[cfg(feature = "vello")]
pub fn to_image_data(bitmap: &Bitmap) -> vello::peniko::ImageData {
    use vello::peniko::{Blob, ImageAlphaType, ImageData, ImageFormat};

    let (width, height) = bitmap.dimensions();
    ImageData {
        data: Blob::from(bitmap.as_bytes().to_vec()),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use npicon_raster::canvas::PixelCanvas;
    use npicon_raster::color::Color;

    fn sample() -> Bitmap {
        let mut canvas = PixelCanvas::new(4);
        canvas.set_pixel(1, 0, Color::rgba(10, 20, 30, 40));
        canvas.set_pixel(3, 3, Color::WHITE);
        canvas.into_bitmap()
    }

    #[test]
    fn test_rgba_image_matches_bitmap_bytes() {
        let bitmap = sample();
        let image = to_rgba_image(&bitmap);
        assert_eq!(image.dimensions(), (4, 4));
        assert_eq!(image.get_pixel(1, 0).0, [10, 20, 30, 40]);
        assert_eq!(image.as_raw().as_slice(), bitmap.as_bytes());
    }

    #[test]
    fn test_png_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        let bitmap = sample();

        save_png(&bitmap, &path).unwrap();
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw().as_slice(), bitmap.as_bytes());
    }

    #[test]
    fn test_save_png_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sample.png");
        assert!(matches!(save_png(&sample(), &path), Err(IconError::IoError(_))));
    }

    #[cfg(feature = "vello")]
    #[test]
    fn test_image_data_handle() {
        let bitmap = sample();
        let data = to_image_data(&bitmap);
        assert_eq!((data.width, data.height), (4, 4));
        let bytes: &[u8] = data.data.as_ref();
        assert_eq!(bytes, bitmap.as_bytes());
    }
}
