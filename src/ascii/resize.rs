//! Bilinear resampling of pixel buffers to the character grid size.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use crate::source::PixelBuffer;

/// Copy the color channels of `buffer` into an `RgbImage`, dropping alpha.
fn to_rgb_image(buffer: &PixelBuffer) -> RgbImage {
    let data = buffer.data();
    RgbImage::from_fn(buffer.width(), buffer.height(), |x, y| {
        let idx = buffer.index(x, y);
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}

/// Resize `buffer` to `width` x `height` with a triangle (bilinear) filter.
///
/// The result is always RGB. A zero target returns an empty buffer.
pub fn resize(buffer: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    if width == 0 || height == 0 || buffer.is_empty() {
        return PixelBuffer::from(RgbImage::new(0, 0));
    }

    let source = to_rgb_image(buffer);
    if (width, height) == source.dimensions() {
        return PixelBuffer::from(source);
    }
    PixelBuffer::from(imageops::resize(&source, width, height, FilterType::Triangle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PixelFormat;

    #[test]
    fn test_resize_dimensions() {
        let buf = PixelBuffer::new(vec![128; 8 * 6 * 3], 8, 6, PixelFormat::Rgb).unwrap();
        let out = resize(&buf, 4, 3);
        assert_eq!((out.width(), out.height()), (4, 3));
        assert_eq!(out.format(), PixelFormat::Rgb);
        assert_eq!(out.data().len(), 4 * 3 * 3);
    }

    #[test]
    fn test_resize_uniform_keeps_value() {
        let buf = PixelBuffer::new(vec![200; 10 * 10 * 3], 10, 10, PixelFormat::Rgb).unwrap();
        let out = resize(&buf, 3, 7);
        assert!(out.data().iter().all(|&v| v.abs_diff(200) <= 1));
    }

    #[test]
    fn test_resize_drops_alpha() {
        let buf = PixelBuffer::new(vec![9, 9, 9, 0], 1, 1, PixelFormat::Rgba).unwrap();
        let out = resize(&buf, 2, 2);
        assert_eq!(out.format(), PixelFormat::Rgb);
        assert!(out.data().iter().all(|&v| v.abs_diff(9) <= 1));
    }

    #[test]
    fn test_resize_to_zero() {
        let buf = PixelBuffer::new(vec![0; 3], 1, 1, PixelFormat::Rgb).unwrap();
        assert!(resize(&buf, 0, 5).is_empty());
    }
}
