//! Image source types and data structures.

use std::fmt;
use std::path::PathBuf;

use super::error::SourceError;

/// Pixel format of a decoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// RGB format (3 bytes per pixel)
    Rgb,
    /// RGBA format (4 bytes per pixel)
    Rgba,
}

impl PixelFormat {
    /// Get the number of bytes per pixel.
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// A decoded image in row-major order.
///
/// Pixel `(x, y)` starts at byte `(y * width + x) * channels`.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl PixelBuffer {
    /// Wrap raw pixel bytes, checking that the length matches the dimensions.
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Self, SourceError> {
        let expected = width as usize * height as usize * format.channels();
        if data.len() != expected {
            return Err(SourceError::InvalidBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Get the number of bytes per pixel.
    pub fn channels(&self) -> usize {
        self.format.channels()
    }

    /// Byte offset of pixel `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels()
    }

    /// True when the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Iterate over the `(r, g, b)` channels of every pixel in row-major order.
    pub fn rgb(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.data
            .chunks_exact(self.channels())
            .map(|px| (px[0], px[1], px[2]))
    }
}

impl From<image::RgbImage> for PixelBuffer {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            data: img.into_raw(),
            width,
            height,
            format: PixelFormat::Rgb,
        }
    }
}

impl From<image::RgbaImage> for PixelBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            data: img.into_raw(),
            width,
            height,
            format: PixelFormat::Rgba,
        }
    }
}

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageInput {
    /// Remote image fetched over HTTP(S)
    Url(String),
    /// Image file on the local filesystem
    Path(PathBuf),
    /// Already-fetched encoded image bytes
    Bytes(Vec<u8>),
}

impl ImageInput {
    /// Classify a user-supplied location: anything with an `http://` or
    /// `https://` scheme is a URL, everything else a local path.
    pub fn from_location(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageInput::Url(location.to_string())
        } else {
            ImageInput::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for ImageInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageInput::Url(url) => write!(f, "{}", url),
            ImageInput::Path(path) => write!(f, "{}", path.display()),
            ImageInput::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}
