//! Process-wide rendering settings.
//!
//! [`Settings`] is a small immutable value. [`SettingsStore`] holds the
//! current one and replaces it wholesale, so a reader always sees either the
//! settings before an update or the settings after it, never a mix.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::ascii::{CharSet, Dimension, MAX_DIMENSION};

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 150;

/// Rendering settings consumed by every conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub charset: CharSet,
    pub width: Dimension,
    pub height: Dimension,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            charset: CharSet::Small,
            width: Dimension::Fixed(DEFAULT_WIDTH),
            height: Dimension::Auto,
        }
    }
}

/// Raw settings fields as received from a form body or the command line.
///
/// Absent and empty fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsUpdate {
    #[serde(rename = "charSet", default)]
    pub char_set: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
}

/// Errors raised while validating a settings update.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid charSet. Select BIG or SMALL.")]
    InvalidCharSet,

    #[error("Invalid {field}. Out of range 0 - {max}.", max = MAX_DIMENSION)]
    OutOfRange {
        /// `width` or `height`
        field: &'static str,
    },

    #[error("Invalid {field}. '{value}' is not a number.")]
    NotANumber { field: &'static str, value: String },
}

/// JSON shape returned by the settings endpoint:
/// `{"charSet":{"value":...},"width":{"value":...},"height":{"value":...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSnapshot {
    #[serde(rename = "charSet")]
    pub char_set: Field<String>,
    pub width: Field<Dimension>,
    pub height: Field<Dimension>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field<T> {
    pub value: T,
}

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_dimension(field: &'static str, raw: &str) -> Result<Dimension, SettingsError> {
    let value: i64 = raw.parse().map_err(|_| SettingsError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    if !(0..=MAX_DIMENSION as i64).contains(&value) {
        return Err(SettingsError::OutOfRange { field });
    }
    Ok(Dimension::from_value(value as u32))
}

impl Settings {
    /// Validate every supplied field, then build the updated settings.
    ///
    /// Nothing is produced unless all fields pass, so a bad `height` cannot
    /// leave a new `charSet` half-applied.
    pub fn apply(&self, update: &SettingsUpdate) -> Result<Settings, SettingsError> {
        let charset = match present(&update.char_set) {
            Some(token) => CharSet::from_token(token).ok_or(SettingsError::InvalidCharSet)?,
            None => self.charset,
        };
        let width = match present(&update.width) {
            Some(raw) => parse_dimension("width", raw)?,
            None => self.width,
        };
        let height = match present(&update.height) {
            Some(raw) => parse_dimension("height", raw)?,
            None => self.height,
        };

        Ok(Settings {
            charset,
            width,
            height,
        })
    }

    /// Snapshot reporting the ramp content and resolved dimensions.
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            char_set: Field {
                value: self.charset.joined(),
            },
            width: Field { value: self.width },
            height: Field { value: self.height },
        }
    }
}

/// Shared holder of the current [`Settings`].
#[derive(Debug, Default)]
pub struct SettingsStore {
    current: RwLock<Settings>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// The settings in effect right now.
    pub fn current(&self) -> Settings {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate `update` against the current settings and swap the result in.
    ///
    /// The write lock is held across validation so concurrent updates apply
    /// one after another instead of overwriting each other.
    pub fn update(&self, update: &SettingsUpdate) -> Result<Settings, SettingsError> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = guard.apply(update)?;
        *guard = next;
        Ok(next)
    }
}
