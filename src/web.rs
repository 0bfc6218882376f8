//! Browser environment and WASM exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. [`WebEnv`] maps [`ThemeEnv`] onto
//! `document`, `document.documentElement` and `window.localStorage`. The
//! exported functions are what the page's script tag calls; with `autostart`
//! the default install runs as soon as the module loads.
//!
//! TRADE-OFFS
//! ==========
//! Storage and attribute failures (quota, disabled storage) are logged and
//! dropped. The page still renders a coherent mode for the current visit.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage};

use crate::config::ThemeConfig;
use crate::controller::install;
use crate::env::ThemeEnv;

pub struct WebEnv {
    document: Document,
    storage: Option<Storage>,
}

impl WebEnv {
    /// Bind to the current window. `None` outside a browser document.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::debug!("theme: localStorage unavailable; mode will not persist");
        }
        Some(Self { document, storage })
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }
}

impl ThemeEnv for WebEnv {
    type Control = Element;

    fn locate_control(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn persisted(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_persisted(&self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("theme: localStorage write failed: {err:?}");
        }
    }

    fn presentation_flag(&self, attribute: &str) -> Option<String> {
        self.root()?.get_attribute(attribute)
    }

    fn set_presentation_flag(&self, attribute: &str, value: &str) {
        if let Some(root) = self.root() {
            if let Err(err) = root.set_attribute(attribute, value) {
                log::debug!("theme: setting {attribute} failed: {err:?}");
            }
        }
    }

    fn set_label(&self, control: &Element, label: &str) {
        control.set_text_content(Some(label));
    }

    fn set_description(&self, control: &Element, description: &str) {
        if let Err(err) = control.set_attribute("aria-label", description) {
            log::debug!("theme: setting aria-label failed: {err:?}");
        }
    }

    fn on_click(&self, control: &Element, handler: Box<dyn FnMut()>) {
        let closure = Closure::wrap(handler);
        if let Err(err) = control.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
            log::warn!("theme: click listener registration failed: {err:?}");
        }
        // Listener lives for the rest of the page.
        closure.forget();
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized when several installs share a page.
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn install_in_browser(config: ThemeConfig) {
    init_logging();
    let Some(env) = WebEnv::from_window() else {
        log::warn!("theme: no browser document; toggle not installed");
        return;
    };
    // A missing control is already logged by `install`.
    let _ = install(env, config);
}

/// Install the toggle with the default configuration.
#[wasm_bindgen]
pub fn install_theme_toggle() {
    install_in_browser(ThemeConfig::default());
}

/// Install the toggle with a JSON configuration; missing fields keep defaults.
///
/// # Errors
///
/// Returns the config parse error as a JS string.
#[wasm_bindgen]
pub fn install_theme_toggle_with(config_json: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(config_json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    install_in_browser(config);
    Ok(())
}

#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() {
    install_theme_toggle();
}
