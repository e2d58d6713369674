//! ImageClient - fetches and decodes images into pixel buffers.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::io::AsyncReadExt;

use super::error::SourceError;
use super::types::{ImageInput, PixelBuffer};

/// Default timeout for HTTP requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default cap on downloaded image size (16 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 16 * 1024 * 1024;

/// Limits applied when fetching remote images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// Decode encoded image bytes (PNG, JPEG, GIF, ...) into a pixel buffer.
///
/// Images with an alpha channel keep it (RGBA); everything else is
/// converted to RGB.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, SourceError> {
    let img = image::load_from_memory(bytes)?;
    if img.color().has_alpha() {
        Ok(PixelBuffer::from(img.to_rgba8()))
    } else {
        Ok(PixelBuffer::from(img.to_rgb8()))
    }
}

/// Client for loading images from URLs, files or raw bytes.
pub struct ImageClient {
    options: FetchOptions,
    http_client: reqwest::Client,
}

impl ImageClient {
    /// Create a client with default timeouts and size cap.
    pub fn new() -> Result<Self, SourceError> {
        Self::with_options(FetchOptions::default())
    }

    /// Create a client with explicit fetch limits.
    pub fn with_options(options: FetchOptions) -> Result<Self, SourceError> {
        let http_client = reqwest::Client::builder()
            .timeout(options.timeout)
            .connect_timeout(options.connect_timeout)
            .build()?;

        Ok(Self {
            options,
            http_client,
        })
    }

    /// Get the fetch limits.
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Load and decode an image from any supported input.
    ///
    /// Every input is held to `max_bytes`. Decoding runs on the blocking
    /// pool.
    pub async fn load(&self, input: &ImageInput) -> Result<PixelBuffer, SourceError> {
        let bytes = match input {
            ImageInput::Url(url) => self.fetch(url).await?,
            ImageInput::Path(path) => self.read_file(path).await?,
            ImageInput::Bytes(bytes) => {
                if bytes.len() as u64 > self.options.max_bytes {
                    return Err(SourceError::TooLarge {
                        limit: self.options.max_bytes,
                    });
                }
                bytes.clone()
            }
        };

        tokio::task::spawn_blocking(move || decode(&bytes)).await?
    }

    /// Read a local image file, stopping one byte past the cap.
    ///
    /// Reading is bounded rather than trusting file metadata, so devices and
    /// pipes that report a zero length are capped as well.
    pub async fn read_file(&self, path: &Path) -> Result<Vec<u8>, SourceError> {
        let limit = self.options.max_bytes;
        let file = tokio::fs::File::open(path).await?;

        let mut bytes = Vec::new();
        file.take(limit.saturating_add(1))
            .read_to_end(&mut bytes)
            .await?;
        if bytes.len() as u64 > limit {
            return Err(SourceError::TooLarge { limit });
        }

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }

    /// Download the raw bytes behind `url`.
    ///
    /// The body is streamed so that an oversized response is abandoned as
    /// soon as it crosses `max_bytes`.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Status` for non-2xx responses,
    /// `SourceError::TooLarge` if the body exceeds the cap, or
    /// `SourceError::Http` if the request itself fails.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, SourceError> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status {
                status: response.status(),
            });
        }

        let limit = self.options.max_bytes;
        if let Some(len) = response.content_length() {
            if len > limit {
                return Err(SourceError::TooLarge { limit });
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            if body.len() as u64 + chunk.len() as u64 > limit {
                return Err(SourceError::TooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::PixelFormat;
    use std::io::Cursor;

    fn encode_png(img: image::DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_rgb_png() {
        let img = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
        let buf = decode(&encode_png(image::DynamicImage::ImageRgb8(img))).unwrap();
        assert_eq!(buf.width(), 3);
        assert_eq!(buf.height(), 2);
        assert_eq!(buf.format(), PixelFormat::Rgb);
        assert_eq!(&buf.data()[..3], &[10, 20, 30]);
    }

    #[test]
    fn test_decode_keeps_alpha() {
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([1, 2, 3, 4]));
        let buf = decode(&encode_png(image::DynamicImage::ImageRgba8(img))).unwrap();
        assert_eq!(buf.format(), PixelFormat::Rgba);
        assert_eq!(buf.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }

    #[test]
    fn test_client_defaults() {
        let client = ImageClient::new().unwrap();
        assert_eq!(client.options(), &FetchOptions::default());
        assert_eq!(client.options().max_bytes, DEFAULT_MAX_BYTES);
    }

    fn capped(max_bytes: u64) -> ImageClient {
        ImageClient::with_options(FetchOptions {
            max_bytes,
            ..FetchOptions::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_read_file_respects_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        std::fs::write(&path, vec![0u8; 4096]).unwrap();

        let result = capped(8).load(&ImageInput::Path(path)).await;
        assert!(matches!(result, Err(SourceError::TooLarge { limit: 8 })));
    }

    #[tokio::test]
    async fn test_read_file_at_cap_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exact.bin");
        std::fs::write(&path, vec![7u8; 8]).unwrap();

        let bytes = capped(8).read_file(&path).await.unwrap();
        assert_eq!(bytes.len(), 8);
    }

    #[tokio::test]
    async fn test_bytes_input_respects_cap() {
        let result = capped(4).load(&ImageInput::Bytes(vec![0; 5])).await;
        assert!(matches!(result, Err(SourceError::TooLarge { limit: 4 })));
    }

    #[tokio::test]
    async fn test_load_decodes_off_runtime_thread() {
        let img = image::RgbImage::from_pixel(2, 3, image::Rgb([0, 0, 0]));
        let bytes = encode_png(image::DynamicImage::ImageRgb8(img));
        let buf = ImageClient::new()
            .unwrap()
            .load(&ImageInput::Bytes(bytes))
            .await
            .unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 3));
    }

    #[tokio::test]
    async fn test_load_missing_path_is_io_error() {
        let client = ImageClient::new().unwrap();
        let input = ImageInput::Path("/nonexistent/definitely/missing.png".into());
        let result = client.load(&input).await;
        assert!(matches!(result, Err(SourceError::Io(_))));
    }
}
