//! Theme controller: resolves the initial mode and flips it on request.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`install`] runs once when the page script loads. It builds a
//! [`ThemeController`] and hands the environment a click handler that calls
//! [`ThemeController::toggle`]. All handler invocations happen on the browser
//! event loop, one at a time, so the shared controller is an `Rc<RefCell<_>>`.
//!
//! After `init` or `toggle` returns, the presentation attribute, the persisted
//! value and the control's label/description all describe the same [`Mode`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::env::ThemeEnv;
use crate::error::ThemeError;
use crate::mode::Mode;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Controller shared between the installer and the registered click handler.
pub type SharedController<E> = Rc<RefCell<ThemeController<E>>>;

pub struct ThemeController<E: ThemeEnv> {
    env: E,
    config: ThemeConfig,
    control: E::Control,
    mode: Mode,
}

impl<E: ThemeEnv> ThemeController<E> {
    /// Locate the control, resolve the active mode and render it.
    ///
    /// A missing or unrecognized persisted value falls back to
    /// `config.default_mode`. Whenever the stored text is not the canonical
    /// `dark` / `light`, the resolved mode is written back to the store.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ControlElementMissing`] if the control cannot be
    /// found. Nothing is read or written in that case.
    pub fn init(env: E, config: ThemeConfig) -> Result<Self, ThemeError> {
        let Some(control) = env.locate_control(&config.control_id) else {
            return Err(ThemeError::ControlElementMissing { id: config.control_id });
        };

        let raw = env.persisted(&config.storage_key);
        let stored = Mode::parse_stored(raw.as_deref());
        let mode = stored.unwrap_or(config.default_mode);

        let mut controller = Self { env, config, control, mode };
        controller.apply(mode);
        // Store must hold the canonical spelling the attribute carries.
        if raw.as_deref() != Some(mode.as_str()) {
            controller.persist(mode);
        }

        log::debug!("theme: resolved {mode} (persisted: {})", stored.is_some());
        Ok(controller)
    }

    /// Flip the mode, re-render and persist it. Returns the new mode.
    ///
    /// The presentation attribute is read as the current mode; the last
    /// applied mode is used only if the attribute is missing or unrecognized.
    pub fn toggle(&mut self) -> Mode {
        let shown = Mode::parse_stored(self.env.presentation_flag(&self.config.attribute).as_deref());
        let next = shown.unwrap_or(self.mode).flipped();

        self.apply(next);
        self.persist(next);

        log::debug!("theme: toggled to {next}");
        next
    }

    /// Mode most recently applied by this controller.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    fn apply(&mut self, mode: Mode) {
        self.mode = mode;
        self.env.set_presentation_flag(&self.config.attribute, mode.as_str());
        self.env.set_label(&self.control, mode.glyph());
        self.env.set_description(&self.control, mode.toggle_description());
    }

    fn persist(&self, mode: Mode) {
        self.env.set_persisted(&self.config.storage_key, mode.as_str());
    }
}

/// Initialize the controller and register its click handler.
///
/// A missing control is logged at `warn` and returned as an error; the page
/// keeps working without theme toggling.
///
/// # Errors
///
/// Returns [`ThemeError::ControlElementMissing`] if the control cannot be found.
pub fn install<E>(env: E, config: ThemeConfig) -> Result<SharedController<E>, ThemeError>
where
    E: ThemeEnv + 'static,
{
    let controller = match ThemeController::init(env, config) {
        Ok(controller) => Rc::new(RefCell::new(controller)),
        Err(err) => {
            log::warn!("{err}; theme toggling disabled");
            return Err(err);
        }
    };

    // The handler keeps the controller alive for as long as the listener exists.
    let handle = Rc::clone(&controller);
    {
        let current = controller.borrow();
        current.env.on_click(
            &current.control,
            Box::new(move || {
                handle.borrow_mut().toggle();
            }),
        );
    }

    Ok(controller)
}
