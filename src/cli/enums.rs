//! CLI enum types.

use clap::ValueEnum;

use crate::ascii;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CharacterSet {
    Small,
    Big,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Small => ascii::CharSet::Small,
            CharacterSet::Big => ascii::CharSet::Big,
        }
    }
}

impl CharacterSet {
    /// Settings token (`SMALL` / `BIG`) for this choice.
    pub fn token(&self) -> &'static str {
        ascii::CharSet::from(*self).token()
    }
}
