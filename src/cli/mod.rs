//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, SettingsArgs};
pub use commands::{
    build_service, generate, handle_config_action, init_config, list_examples, show_settings,
    CommandError,
};
pub use enums::CharacterSet;
