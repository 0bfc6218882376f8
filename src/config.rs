//! Toggle configuration: which element, storage key and attribute to use.

use serde::Deserialize;

use crate::error::ThemeError;
use crate::mode::Mode;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CONTROL_ID: &str = "themeBtn";
pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Id of the clickable toggle control.
    pub control_id: String,
    /// `localStorage` key holding the persisted mode.
    pub storage_key: String,
    /// Attribute on the root element that styling rules read.
    pub attribute: String,
    /// Mode used when nothing usable is persisted.
    pub default_mode: Mode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            control_id: DEFAULT_CONTROL_ID.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            default_mode: Mode::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON object; missing fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
