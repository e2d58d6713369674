//! asciify library crate.
//!
//! Converts raster images into ASCII art by mapping per-pixel brightness onto
//! a glyph ramp, and exposes the generate/settings entry points used by the
//! command-line front end.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod service;
pub mod settings;
pub mod source;
