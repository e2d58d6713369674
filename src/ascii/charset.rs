//! Glyph ramps used for brightness-to-character mapping.

/// Small density ramp (10 levels).
/// Characters ordered from lightest-looking (space) at index 0 to the
/// densest glyph (@) at the last index.
pub const SMALL_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Big density ramp (70 levels), after Paul Bourke's character ramp.
#[rustfmt::skip]
pub const BIG_CHARSET: &[char] = &[
    ' ', '.', '\'', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~',
    '+', '_', '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't', 'f',
    'j', 'r', 'x', 'n', 'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0',
    'O', 'Z', 'm', 'w', 'q', 'p', 'd', 'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W',
    '&', '8', '%', 'B', '@', '$',
];

/// Selectable glyph ramp.
///
/// The ramps are `'static` slices, so a selected ramp can be shared between
/// concurrent conversions without any of them being able to reorder it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// 10-level ramp
    #[default]
    Small,
    /// 70-level ramp
    Big,
}

impl CharSet {
    /// Get the character slice for this charset.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Small => SMALL_CHARSET,
            CharSet::Big => BIG_CHARSET,
        }
    }

    /// Token accepted by the settings endpoint and config file.
    pub fn token(&self) -> &'static str {
        match self {
            CharSet::Small => "SMALL",
            CharSet::Big => "BIG",
        }
    }

    /// Parse a settings token. Matching is exact: `"small"` is rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "SMALL" => Some(CharSet::Small),
            "BIG" => Some(CharSet::Big),
            _ => None,
        }
    }

    /// Ramp content joined with commas, as reported in settings snapshots.
    pub fn joined(&self) -> String {
        let mut out = String::with_capacity(self.chars().len() * 2);
        for (i, c) in self.chars().iter().enumerate() {
            if i != 0 {
                out.push(',');
            }
            out.push(*c);
        }
        out
    }
}
