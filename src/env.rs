//! Capability interface between the toggle logic and its host page.
//!
//! DESIGN
//! ======
//! The controller never touches browser globals directly. Everything it reads
//! or writes goes through [`ThemeEnv`], so the same logic runs against the real
//! DOM (`web::WebEnv`) and against [`crate::memory::MemoryEnv`] in tests.
//! Writes are fire-and-forget: implementations swallow host failures.

/// Host operations the theme controller depends on.
pub trait ThemeEnv {
    /// Handle to the toggle control element.
    type Control;

    /// Find the toggle control by element id.
    fn locate_control(&self, id: &str) -> Option<Self::Control>;

    /// Read the persisted value for `key`, if any.
    fn persisted(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    fn set_persisted(&self, key: &str, value: &str);

    /// Read the document-wide presentation attribute.
    fn presentation_flag(&self, attribute: &str) -> Option<String>;

    /// Set the document-wide presentation attribute.
    fn set_presentation_flag(&self, attribute: &str, value: &str);

    /// Replace the control's visible label.
    fn set_label(&self, control: &Self::Control, label: &str);

    /// Replace the control's accessibility description.
    fn set_description(&self, control: &Self::Control, description: &str);

    /// Register `handler` to run on every click of `control`.
    fn on_click(&self, control: &Self::Control, handler: Box<dyn FnMut()>);
}
