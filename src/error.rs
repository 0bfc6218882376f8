//! Error type for theme toggle setup.

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The toggle control could not be found in the document.
    #[error("theme control #{id} not found")]
    ControlElementMissing { id: String },

    /// Configuration JSON could not be parsed.
    #[error("invalid theme config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
