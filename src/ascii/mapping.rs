//! Brightness to character mapping.

/// Quantize a brightness value to a ramp index.
///
/// `linear = 1 - brightness / 255`, then `round(linear * (levels - 1))`
/// clamped to `[0, levels - 1]`. Black lands on the last glyph and white on
/// the first. With `inverted` the index is complemented, which reads the
/// ramp back to front without touching it.
///
/// # Arguments
/// * `brightness` - Brightness value, nominally in `[0, 255]`
/// * `levels` - Ramp length
/// * `inverted` - Traverse the ramp in reverse
pub fn quantize(brightness: f64, levels: usize, inverted: bool) -> usize {
    if levels == 0 {
        return 0;
    }

    let last = levels - 1;
    let linear = 1.0 - brightness.clamp(0.0, 255.0) / 255.0;
    let idx = ((linear * last as f64).round() as usize).min(last);

    if inverted {
        last - idx
    } else {
        idx
    }
}

/// Map brightness values to characters from `charset`.
///
/// # Returns
/// A vector of characters, one per input brightness value. An empty
/// charset maps everything to spaces.
pub fn map_to_chars(brightness: &[f64], charset: &[char], invert: bool) -> Vec<char> {
    if charset.is_empty() {
        return vec![' '; brightness.len()];
    }

    brightness
        .iter()
        .map(|&b| charset[quantize(b, charset.len(), invert)])
        .collect()
}
