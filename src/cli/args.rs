//! CLI argument parsing with clap.

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::settings::SettingsUpdate;

/// Convert images to ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert images to ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    asciify generate https://example.com/cat.png
    asciify generate ./photo.jpg --width 80 --charset big
    asciify generate --random --inverted
    asciify settings --width 0 --height 40")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Overrides for the rendering settings.
#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsArgs {
    /// Glyph ramp
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Output width in characters, 0-500 (0 = auto)
    #[arg(long, short = 'W')]
    pub width: Option<String>,

    /// Output height in characters, 0-500 (0 = auto)
    #[arg(long, short = 'H')]
    pub height: Option<String>,
}

impl SettingsArgs {
    /// Raw update to run through settings validation.
    pub fn to_update(&self) -> SettingsUpdate {
        SettingsUpdate {
            char_set: self.charset.map(|c| c.token().to_string()),
            width: self.width.clone(),
            height: self.height.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.charset.is_none() && self.width.is_none() && self.height.is_none()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an image URL or file as ASCII art
    Generate {
        /// Image URL (http/https) or local file path
        #[arg(required_unless_present = "random")]
        source: Option<String>,

        /// Use one of the built-in example image URLs
        #[arg(long, conflicts_with = "source")]
        random: bool,

        /// Read the glyph ramp back to front
        #[arg(long, short)]
        inverted: bool,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Write the art to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Validate settings and print the resulting snapshot as JSON
    Settings {
        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// List the built-in example image URLs
    Examples,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
