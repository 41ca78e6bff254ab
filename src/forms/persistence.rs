//! Keeps form field contents in the key-value store across reloads.
//!
//! Every field is keyed by its `name` attribute in one flat namespace, so two
//! forms that both have an `email` field share a single stored value (last
//! writer wins). Restored values are written back blindly, without checking
//! them against the field's type or pattern.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config;
use crate::storage::{SharedStore, StorageError};

const FIELD_SELECTOR: &str = "form input, form select, form textarea";

/// A form control whose value can be persisted and restored.
pub trait FormField {
    fn name(&self) -> String;
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

impl<T: FormField + ?Sized> FormField for &T {
    fn name(&self) -> String {
        (**self).name()
    }

    fn value(&self) -> String {
        (**self).value()
    }

    fn set_value(&self, value: &str) {
        (**self).set_value(value)
    }
}

#[derive(Clone, PartialEq)]
pub struct FieldMemory {
    store: SharedStore,
}

impl FieldMemory {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Writes the field's current value. Unnamed fields are skipped, and so is
    /// the chat log key, which belongs to the chat manager.
    pub fn remember(&self, name: &str, value: &str) -> Result<(), StorageError> {
        if !is_persistable(name) {
            debug!("Not persisting field with name {:?}", name);
            return Ok(());
        }
        self.store.set(name, value)
    }

    /// Stored value for `name`; an empty stored string counts as absent.
    pub fn recall(&self, name: &str) -> Option<String> {
        if !is_persistable(name) {
            return None;
        }
        self.store.get(name).filter(|v| !v.is_empty())
    }

    /// Overwrites every field that has a stored value and returns how many
    /// were restored. Fields without one keep their default.
    pub fn restore<F, I>(&self, fields: I) -> usize
    where
        F: FormField,
        I: IntoIterator<Item = F>,
    {
        let mut restored = 0;
        for field in fields {
            if let Some(value) = self.recall(&field.name()) {
                field.set_value(&value);
                restored += 1;
            }
        }
        restored
    }

    pub fn restore_document(&self, document: &Document) -> usize {
        let restored = self.restore(DomField::collect(document));
        debug!("Restored {} form field(s) from storage", restored);
        restored
    }

    /// Subscribes to `input` on every form field in the document. Listeners
    /// stay registered until the returned guard is dropped.
    pub fn attach(&self, document: &Document) -> FieldListeners {
        let mut bindings = Vec::new();
        for field in DomField::collect(document) {
            if !is_persistable(&field.name()) {
                continue;
            }
            let element = field.element().clone();
            let memory = self.clone();
            let callback = Closure::wrap(Box::new(move || {
                if let Err(e) = memory.remember(&field.name(), &field.value()) {
                    warn!("{}", e);
                }
            }) as Box<dyn FnMut()>);

            match element.add_event_listener_with_callback("input", callback.as_ref().unchecked_ref()) {
                Ok(()) => bindings.push((element, callback)),
                Err(e) => warn!("Could not watch form field: {:?}", e),
            }
        }
        debug!("Watching {} form field(s) for changes", bindings.len());
        FieldListeners { bindings }
    }
}

fn is_persistable(name: &str) -> bool {
    !name.is_empty() && name != config::CHAT_LOG_KEY
}

/// Removes the `input` listeners registered by [`FieldMemory::attach`] on drop.
pub struct FieldListeners {
    bindings: Vec<(Element, Closure<dyn FnMut()>)>,
}

impl Drop for FieldListeners {
    fn drop(&mut self) {
        for (element, callback) in &self.bindings {
            let _ = element.remove_event_listener_with_callback("input", callback.as_ref().unchecked_ref());
        }
    }
}

/// DOM-backed form control.
#[derive(Clone)]
pub enum DomField {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl DomField {
    /// File inputs are left out: their value cannot be set from script.
    pub fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) if input.type_() == "file" => return None,
            Ok(input) => return Some(Self::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Self::Select(select)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea)
    }

    pub fn collect(document: &Document) -> Vec<Self> {
        let nodes = match document.query_selector_all(FIELD_SELECTOR) {
            Ok(nodes) => nodes,
            Err(e) => {
                warn!("Form field query failed: {:?}", e);
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(Self::from_element)
            .collect()
    }

    pub fn element(&self) -> &Element {
        match self {
            Self::Input(el) => el,
            Self::Select(el) => el,
            Self::TextArea(el) => el,
        }
    }
}

impl FormField for DomField {
    fn name(&self) -> String {
        match self {
            Self::Input(el) => el.name(),
            Self::Select(el) => el.name(),
            Self::TextArea(el) => el.name(),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Select(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::Select(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
        }
    }
}
