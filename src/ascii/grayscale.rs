//! Per-pixel brightness as the unweighted mean of the color channels.

use crate::source::PixelBuffer;

/// Brightness of one pixel: `(R + G + B) / 3`, in `[0, 255]`.
///
/// This is deliberately not perceptual luminance; every channel counts the
/// same so ramp positions line up with the reference renderer.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 + g as f64 + b as f64) / 3.0
}

/// Brightness of every pixel in row-major order. Alpha is ignored.
pub fn to_brightness(buffer: &PixelBuffer) -> Vec<f64> {
    buffer.rgb().map(|(r, g, b)| brightness(r, g, b)).collect()
}
