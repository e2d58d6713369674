//! Request-level error taxonomy.

use reqwest::StatusCode;

use crate::settings::SettingsError;
use crate::source::SourceError;

/// Body sent for a request without an image source.
pub const BAD_URL_MESSAGE: &str = "Error, Bad url!";

/// Generic body sent for any conversion failure.
pub const FUNCTION_ERROR_MESSAGE: &str = "Function Error";

/// Errors surfaced by the generate and settings entry points.
#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    /// No image source was supplied
    #[error("No image source given")]
    Input,

    /// The image could not be fetched or decoded
    #[error("Failed to load image: {0}")]
    Decode(#[from] SourceError),

    /// The conversion task panicked or was cancelled
    #[error("Conversion task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A settings value outside its accepted domain
    #[error(transparent)]
    InvalidConfiguration(#[from] SettingsError),
}

impl AsciiError {
    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AsciiError::Input | AsciiError::InvalidConfiguration(_) => StatusCode::BAD_REQUEST,
            AsciiError::Decode(_) | AsciiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the caller. Load failures are not told apart.
    pub fn public_message(&self) -> String {
        match self {
            AsciiError::Input => BAD_URL_MESSAGE.to_string(),
            AsciiError::Decode(_) | AsciiError::Task(_) => FUNCTION_ERROR_MESSAGE.to_string(),
            AsciiError::InvalidConfiguration(e) => e.to_string(),
        }
    }
}
