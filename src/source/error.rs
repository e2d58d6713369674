//! Error types for image loading.

/// Errors that can occur while fetching or decoding an image.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image request failed with status {status}")]
    Status {
        /// Status code returned by the image host
        status: reqwest::StatusCode,
    },

    #[error("Image exceeds {limit} bytes")]
    TooLarge {
        /// Configured body size cap
        limit: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Decode task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    InvalidBuffer { expected: usize, actual: usize },
}
