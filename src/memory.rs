//! In-process [`ThemeEnv`] backed by plain maps.
//!
//! Used by the unit tests and by hosts without a DOM. Clones share state, so a
//! test can keep one handle while the controller owns another, then inspect
//! the "page" or simulate clicks and external attribute edits.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::env::ThemeEnv;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

type ClickHandler = Box<dyn FnMut()>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub label: Option<String>,
    pub description: Option<String>,
}

#[derive(Default)]
struct Page {
    controls: RefCell<HashMap<String, ControlState>>,
    storage: RefCell<HashMap<String, String>>,
    attributes: RefCell<HashMap<String, String>>,
    handlers: RefCell<Vec<(String, ClickHandler)>>,
    storage_writes: Cell<usize>,
}

/// Click handlers registered through [`crate::install`] hold the controller,
/// which owns a clone of this env, so that pair is never freed. Fine for a
/// page-lifetime controller; long-lived hosts should not install repeatedly.
#[derive(Clone, Default)]
pub struct MemoryEnv {
    page: Rc<Page>,
}

impl MemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a control element with `id`.
    #[must_use]
    pub fn with_control(self, id: &str) -> Self {
        self.add_control(id);
        self
    }

    /// Builder: seed the persisted store.
    #[must_use]
    pub fn with_persisted(self, key: &str, value: &str) -> Self {
        self.page.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn add_control(&self, id: &str) {
        self.page.controls.borrow_mut().entry(id.to_owned()).or_default();
    }

    pub fn persisted_value(&self, key: &str) -> Option<String> {
        self.page.storage.borrow().get(key).cloned()
    }

    /// Number of persisted-store writes performed so far.
    pub fn storage_writes(&self) -> usize {
        self.page.storage_writes.get()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.page.attributes.borrow().get(name).cloned()
    }

    /// Change the presentation attribute behind the controller's back.
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.page.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    pub fn remove_attribute(&self, name: &str) {
        self.page.attributes.borrow_mut().remove(name);
    }

    pub fn control(&self, id: &str) -> Option<ControlState> {
        self.page.controls.borrow().get(id).cloned()
    }

    pub fn listener_count(&self) -> usize {
        self.page.handlers.borrow().len()
    }

    /// Fire every click handler registered on `id`. Returns how many ran.
    pub fn click(&self, id: &str) -> usize {
        // Handlers call back into this env, so run them with the list released.
        let mut handlers = std::mem::take(&mut *self.page.handlers.borrow_mut());
        let mut fired = 0;
        for (target, handler) in &mut handlers {
            if target.as_str() == id {
                handler();
                fired += 1;
            }
        }
        let mut slot = self.page.handlers.borrow_mut();
        handlers.append(&mut slot);
        *slot = handlers;
        fired
    }
}

impl ThemeEnv for MemoryEnv {
    type Control = String;

    fn locate_control(&self, id: &str) -> Option<String> {
        self.page.controls.borrow().contains_key(id).then(|| id.to_owned())
    }

    fn persisted(&self, key: &str) -> Option<String> {
        self.persisted_value(key)
    }

    fn set_persisted(&self, key: &str, value: &str) {
        self.page.storage_writes.set(self.page.storage_writes.get() + 1);
        self.page.storage.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn presentation_flag(&self, attribute: &str) -> Option<String> {
        self.attribute(attribute)
    }

    fn set_presentation_flag(&self, attribute: &str, value: &str) {
        self.set_attribute(attribute, value);
    }

    fn set_label(&self, control: &String, label: &str) {
        if let Some(state) = self.page.controls.borrow_mut().get_mut(control) {
            state.label = Some(label.to_owned());
        }
    }

    fn set_description(&self, control: &String, description: &str) {
        if let Some(state) = self.page.controls.borrow_mut().get_mut(control) {
            state.description = Some(description.to_owned());
        }
    }

    fn on_click(&self, control: &String, handler: Box<dyn FnMut()>) {
        self.page.handlers.borrow_mut().push((control.clone(), handler));
    }
}
