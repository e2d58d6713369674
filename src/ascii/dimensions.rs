//! Output size resolution for ASCII rendering.

use serde::{Serialize, Serializer};

/// Largest accepted explicit width or height.
pub const MAX_DIMENSION: u32 = 500;

/// Sentinel reported in place of a number for auto-sized axes.
pub const AUTO_SENTINEL: &str = "auto";

/// A requested output width or height.
///
/// `Auto` derives the axis from the other one so the source aspect ratio is
/// kept. A fixed value is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Auto,
    Fixed(u32),
}

impl Dimension {
    /// Map a settings value to a dimension: `0` means auto.
    pub fn from_value(value: u32) -> Self {
        if value == 0 {
            Dimension::Auto
        } else {
            Dimension::Fixed(value)
        }
    }

    /// The explicit value, or `None` for auto.
    pub fn value(&self) -> Option<u32> {
        match self {
            Dimension::Auto => None,
            Dimension::Fixed(v) => Some(*v),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Auto => serializer.serialize_str(AUTO_SENTINEL),
            Dimension::Fixed(v) => serializer.serialize_u32(*v),
        }
    }
}

/// Resolve the character grid size for a source image.
///
/// Rules, in order:
/// 1. A zero-area source yields `(0, 0)`.
/// 2. A fixed width wider than the source is clamped to the source width.
/// 3. An auto axis is derived from the other one, rounded, at least 1. A
///    derived width is held to the source width too, so an auto width
///    caps at the source size.
/// 4. Both auto keeps the source size; both fixed is used as-is, even if
///    that distorts the aspect ratio.
pub fn resolve_dimensions(
    img_width: u32,
    img_height: u32,
    width: Dimension,
    height: Dimension,
) -> (u32, u32) {
    if img_width == 0 || img_height == 0 {
        return (0, 0);
    }

    let width = match width {
        Dimension::Fixed(w) if w > img_width => Dimension::Fixed(img_width),
        other => other,
    };

    match (width, height) {
        (Dimension::Fixed(w), Dimension::Fixed(h)) => (w, h),
        (Dimension::Fixed(w), Dimension::Auto) => (w, scale(w, img_height, img_width)),
        (Dimension::Auto, Dimension::Fixed(h)) => {
            let w = scale(h, img_width, img_height);
            if w > img_width {
                (img_width, img_height)
            } else {
                (w, h)
            }
        }
        (Dimension::Auto, Dimension::Auto) => (img_width, img_height),
    }
}

/// `known * num / den`, rounded half-up, never below 1.
fn scale(known: u32, num: u32, den: u32) -> u32 {
    let scaled = (known as f64 * num as f64 / den as f64).round();
    (scaled as u32).max(1)
}
