//! Display mode value and the control presentation derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// Glyph shown on the control while the page is dark.
pub const DARK_GLYPH: &str = "🌙";

/// Glyph shown on the control while the page is light.
pub const LIGHT_GLYPH: &str = "🌞";

/// Page display mode. Stored and rendered as `dark` / `light`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    /// The other mode.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Attribute/storage value for this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Control label: a glyph for the *current* mode.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dark => DARK_GLYPH,
            Self::Light => LIGHT_GLYPH,
        }
    }

    /// Accessibility description: announces what a click will do next.
    #[must_use]
    pub fn toggle_description(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light theme",
            Self::Light => "Switch to dark theme",
        }
    }

    /// Parse a stored value, treating anything unrecognized as absent.
    #[must_use]
    pub fn parse_stored(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `dark` nor `light`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown display mode: {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else if trimmed.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else {
            Err(UnknownMode(s.to_owned()))
        }
    }
}
