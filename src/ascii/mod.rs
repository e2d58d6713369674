//! ASCII renderer module for converting images to ASCII art.
//!
//! The pipeline:
//!
//! 1. **Sizing** - resolve the character grid from width/height settings
//! 2. **Resize** - bilinear resample to the grid
//! 3. **Brightness** - unweighted mean of R, G, B per cell
//! 4. **Character mapping** - quantize brightness onto a glyph ramp
//!
//! # Character Sets
//!
//! Two ramps are available via [`CharSet`]:
//! - `Small` - 10-level density ramp
//! - `Big` - 70-level density ramp

mod charset;
mod convert;
mod dimensions;
mod grayscale;
mod mapping;
mod resize;

pub use charset::{CharSet, BIG_CHARSET, SMALL_CHARSET};
pub use convert::{convert, render};
pub use dimensions::{resolve_dimensions, Dimension, AUTO_SENTINEL, MAX_DIMENSION};
pub use grayscale::{brightness, to_brightness};
pub use mapping::{map_to_chars, quantize};
pub use resize::resize;
