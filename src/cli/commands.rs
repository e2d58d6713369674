//! Subcommand handlers.

use std::path::{Path, PathBuf};

use reqwest::StatusCode;

use super::args::{ConfigAction, SettingsArgs};
use crate::config::{default_path as get_config_path, Config, ConfigError, DEFAULT_CONFIG};
use crate::error::AsciiError;
use crate::service::{AsciiService, Response};
use crate::source::{random_example_url, ImageClient, ImageInput, SourceError, EXAMPLE_URLS};

/// Errors reported by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to create image client: {0}")]
    Client(#[from] SourceError),

    #[error(transparent)]
    Generate(#[from] AsciiError),

    #[error("{body} ({status})")]
    Rejected { status: StatusCode, body: String },

    #[error("Failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Failed to create async runtime: {0}")]
    Runtime(std::io::Error),
}

impl CommandError {
    /// Process exit code: 2 for caller mistakes, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Rejected { status, .. } if status.is_client_error() => 2,
            CommandError::Generate(e) if e.status().is_client_error() => 2,
            _ => 1,
        }
    }
}

fn into_result(response: Response) -> Result<String, CommandError> {
    if response.is_success() {
        Ok(response.body)
    } else {
        Err(CommandError::Rejected {
            status: response.status,
            body: response.body,
        })
    }
}

/// Build the service from the config file at `config_path` (or the default).
pub fn build_service(config_path: Option<&Path>) -> Result<AsciiService, CommandError> {
    let config = Config::load(config_path)?;
    let settings = config.initial_settings()?;
    let client = ImageClient::with_options(config.fetch_options())?;
    Ok(AsciiService::new(client, settings))
}

/// Apply command-line overrides through the settings entry point.
fn apply_overrides(service: &AsciiService, settings: &SettingsArgs) -> Result<String, CommandError> {
    into_result(service.update_settings(&settings.to_update()))
}

/// Render `source` (or a random example) and print or save the art.
///
/// Unlike the generate entry point, a `source` without an HTTP(S) scheme is
/// read as a local file.
pub async fn generate(
    service: &AsciiService,
    source: Option<String>,
    random: bool,
    inverted: bool,
    settings: &SettingsArgs,
    output: Option<&Path>,
) -> Result<(), CommandError> {
    if !settings.is_empty() {
        apply_overrides(service, settings)?;
    }

    let input = match source.as_deref().map(str::trim) {
        Some(location) if !location.is_empty() => ImageInput::from_location(location),
        _ if random => ImageInput::Url(random_example_url().to_string()),
        _ => return Err(AsciiError::Input.into()),
    };
    log::info!("{}", input);
    let art = service.generate(&input, inverted).await?;

    match output {
        Some(path) => {
            std::fs::write(path, &art).map_err(|e| CommandError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            log::info!("Wrote {} bytes to {}", art.len(), path.display());
        }
        None => println!("{}", art),
    }
    Ok(())
}

/// Validate overrides against the configured settings and print the snapshot.
pub fn show_settings(service: &AsciiService, settings: &SettingsArgs) -> Result<(), CommandError> {
    let snapshot = apply_overrides(service, settings)?;
    println!("{}", snapshot);
    Ok(())
}

/// Print the built-in example image URLs.
pub fn list_examples() {
    println!("Example images:");
    for (i, url) in EXAMPLE_URLS.iter().enumerate() {
        println!("  [{}] {}", i, url);
    }
    println!();
    println!("Use `asciify generate --random` to render one of them.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
) -> Result<(), CommandError> {
    let path = config_path.map(PathBuf::from).unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(&path))?;
            let settings = config.initial_settings()?;
            let fetch = config.fetch_options();

            println!("Current configuration:");
            println!("  Charset: {}", settings.charset.token());
            println!("  Width: {}", describe(settings.width.value()));
            println!("  Height: {}", describe(settings.height.value()));
            println!("  Timeout: {}s", fetch.timeout.as_secs());
            println!("  Connect timeout: {}s", fetch.connect_timeout.as_secs());
            println!("  Max download: {} bytes", fetch.max_bytes);
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            init_config(&path)?;
            println!("Created config file: {}", path.display());
            Ok(())
        }
    }
}

/// Write [`DEFAULT_CONFIG`] to `path`, refusing to overwrite.
pub fn init_config(path: &Path) -> Result<(), CommandError> {
    if path.exists() {
        return Err(CommandError::AlreadyExists(path.to_path_buf()));
    }

    let io_err = |e| CommandError::Io {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG).map_err(io_err)
}

fn describe(value: Option<u32>) -> String {
    value.map_or_else(|| "auto".to_string(), |v| v.to_string())
}
