//! Transport-agnostic entry points for generating art and changing settings.
//!
//! Each entry point returns a [`Response`] carrying an HTTP status, content
//! type and body, so an HTTP shell only has to copy them onto the wire.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::ascii;
use crate::error::{AsciiError, FUNCTION_ERROR_MESSAGE};
use crate::settings::{Settings, SettingsStore, SettingsUpdate};
use crate::source::{ImageClient, ImageInput};

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";

/// Query parameters of a generate request, as raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub inverted: Option<String>,
}

impl GenerateRequest {
    /// `inverted` is on only for a case-insensitive `"true"`.
    pub fn is_inverted(&self) -> bool {
        self.inverted
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    fn source(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// Status, content type and body of an entry point's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN,
            body: body.into(),
        }
    }

    pub fn json(body: String) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: APPLICATION_JSON,
            body,
        }
    }

    pub fn from_error(err: &AsciiError) -> Self {
        Self::text(err.status(), err.public_message())
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Image-to-ASCII service: one image client plus the shared settings.
pub struct AsciiService {
    client: ImageClient,
    settings: SettingsStore,
}

impl AsciiService {
    pub fn new(client: ImageClient, initial: Settings) -> Self {
        Self {
            client,
            settings: SettingsStore::new(initial),
        }
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Load `input` and render it with the settings current at conversion
    /// time. Rendering runs on the blocking pool.
    pub async fn generate(&self, input: &ImageInput, inverted: bool) -> Result<String, AsciiError> {
        let image = self.client.load(input).await?;
        let settings = self.settings.current();
        log::debug!(
            "Converting {}x{} image with {:?}",
            image.width(),
            image.height(),
            settings
        );
        let art =
            tokio::task::spawn_blocking(move || ascii::convert(&image, &settings, inverted)).await?;
        Ok(art)
    }

    /// Generate entry point.
    ///
    /// The location is always fetched as a remote URL, never read from disk.
    /// 200 with the art on success, 400 when no URL was given, 500 with a
    /// generic message for any load or decode failure.
    pub async fn generate_ascii(&self, request: &GenerateRequest) -> Response {
        let Some(url) = request.source() else {
            return Response::from_error(&AsciiError::Input);
        };
        log::info!("{}", url);

        let input = ImageInput::Url(url.to_string());
        match self.generate(&input, request.is_inverted()).await {
            Ok(art) => Response::text(StatusCode::OK, art),
            Err(e) => {
                log::warn!("Conversion of {} failed: {}", url, e);
                Response::from_error(&e)
            }
        }
    }

    /// Settings entry point.
    ///
    /// 200 with the JSON snapshot on success, 400 with the validation
    /// message otherwise. A rejected update changes nothing.
    pub fn update_settings(&self, update: &SettingsUpdate) -> Response {
        let settings = match self.settings.update(update) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Rejected settings update: {}", e);
                return Response::from_error(&AsciiError::from(e));
            }
        };

        match serde_json::to_string(&settings.snapshot()) {
            Ok(body) => Response::json(body),
            Err(e) => {
                log::error!("Failed to serialize settings: {}", e);
                Response::text(StatusCode::INTERNAL_SERVER_ERROR, FUNCTION_ERROR_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AsciiService {
        AsciiService::new(ImageClient::new().unwrap(), Settings::default())
    }

    #[test]
    fn test_is_inverted() {
        let req = |v: Option<&str>| GenerateRequest {
            url: None,
            inverted: v.map(String::from),
        };
        assert!(req(Some("true")).is_inverted());
        assert!(req(Some("TRUE")).is_inverted());
        assert!(!req(Some("yes")).is_inverted());
        assert!(!req(Some("false")).is_inverted());
        assert!(!req(None).is_inverted());
    }

    #[tokio::test]
    async fn test_missing_url_is_bad_request() {
        let resp = service().generate_ascii(&GenerateRequest::default()).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.body, "Error, Bad url!");
        assert_eq!(resp.content_type, TEXT_PLAIN);
    }

    #[tokio::test]
    async fn test_blank_url_is_bad_request() {
        let request = GenerateRequest {
            url: Some("   ".to_string()),
            inverted: None,
        };
        let resp = service().generate_ascii(&request).await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_local_path_is_not_read() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("black.png");
        image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]))
            .save(&file)
            .unwrap();

        let request = GenerateRequest {
            url: Some(file.display().to_string()),
            inverted: None,
        };
        let resp = service().generate_ascii(&request).await;
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.body, "Function Error");
    }

    #[test]
    fn test_update_settings_ok() {
        let svc = service();
        let resp = svc.update_settings(&SettingsUpdate {
            char_set: Some("BIG".to_string()),
            width: Some("0".to_string()),
            height: Some("40".to_string()),
        });
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.content_type, APPLICATION_JSON);
        let json: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(json["width"]["value"], "auto");
        assert_eq!(json["height"]["value"], 40);
        assert!(json["charSet"]["value"].as_str().unwrap().ends_with("@,$"));
    }

    #[test]
    fn test_update_settings_rejected() {
        let svc = service();
        let resp = svc.update_settings(&SettingsUpdate {
            char_set: None,
            width: Some("501".to_string()),
            height: None,
        });
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.body, "Invalid width. Out of range 0 - 500.");
        assert_eq!(svc.settings().current(), Settings::default());
    }
}
