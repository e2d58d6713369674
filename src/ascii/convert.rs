//! Image to ASCII text conversion.

use super::dimensions::{resolve_dimensions, Dimension};
use super::grayscale::to_brightness;
use super::mapping::map_to_chars;
use super::resize::resize;
use crate::settings::Settings;
use crate::source::PixelBuffer;

/// Convert an image using the ramp and target size from `settings`.
///
/// The settings value is passed in rather than read from shared state, so
/// callers take one snapshot per request.
pub fn convert(image: &PixelBuffer, settings: &Settings, inverted: bool) -> String {
    render(
        image,
        settings.charset.chars(),
        settings.width,
        settings.height,
        inverted,
    )
}

/// Render `image` as rows of glyphs from `ramp`.
///
/// The image is resized to the resolved grid, each pixel's mean RGB
/// brightness is mapped to a glyph, and rows are joined with `\n`
/// (no trailing newline). A zero-area grid or empty ramp renders as `""`.
///
/// # Example
/// ```ignore
/// // 2x2 black image, small ramp
/// let art = render(&black, SMALL_CHARSET, Dimension::Fixed(2), Dimension::Fixed(2), false);
/// assert_eq!(art, "@@\n@@");
/// ```
pub fn render(
    image: &PixelBuffer,
    ramp: &[char],
    width: Dimension,
    height: Dimension,
    inverted: bool,
) -> String {
    let (w, h) = resolve_dimensions(image.width(), image.height(), width, height);
    if w == 0 || h == 0 || ramp.is_empty() {
        return String::new();
    }

    let resized = resize(image, w, h);
    let glyphs = map_to_chars(&to_brightness(&resized), ramp, inverted);

    let cols = w as usize;
    let mut out = String::with_capacity((cols + 1) * h as usize);
    for (i, row) in glyphs.chunks(cols).enumerate() {
        if i != 0 {
            out.push('\n');
        }
        out.extend(row);
    }

    out
}
