//! Thin helpers over `web-sys` lookups and listener wiring.
//!
//! Every listener installed here lives as long as the page, so closures are
//! handed to the browser and forgotten instead of being kept in a holder.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Storage, Window};

use crate::consts::PREFERS_DARK_QUERY;
use crate::error::EnhanceError;
use crate::theme::PreferenceStore;

pub fn window() -> Result<Window, EnhanceError> {
    web_sys::window().ok_or(EnhanceError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, EnhanceError> {
    window.document().ok_or(EnhanceError::NoDocument)
}

/// The `<html>` element.
pub fn root_element(document: &Document) -> Result<HtmlElement, EnhanceError> {
    let root = document.document_element().ok_or(EnhanceError::MissingElement("html"))?;
    into_html(root)
}

/// Look up an element the page markup must provide.
pub fn required_by_id(document: &Document, id: &'static str) -> Result<Element, EnhanceError> {
    document.get_element_by_id(id).ok_or(EnhanceError::MissingElement(id))
}

/// Look up an element whose absence disables a feature.
pub fn optional_by_id(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        log::debug!("enhance: #{id} not present, feature skipped");
    }
    found
}

pub fn optional_query(document: &Document, selector: &str) -> Result<Option<Element>, EnhanceError> {
    let found = document.query_selector(selector)?;
    if found.is_none() {
        log::debug!("enhance: {selector} not present");
    }
    Ok(found)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, EnhanceError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}

pub fn into_html(el: Element) -> Result<HtmlElement, EnhanceError> {
    Ok(el.dyn_into::<HtmlElement>().map_err(JsValue::from)?)
}

/// Attach a page-lifetime listener.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), EnhanceError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Attach a page-lifetime listener that never calls `preventDefault`.
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), EnhanceError> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Attach a listener that fires at most once.
pub fn listen_once(target: &EventTarget, event: &str, handler: impl FnOnce(Event) + 'static) -> Result<(), EnhanceError> {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let cb = Closure::once(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Whether the OS asks for a dark color scheme. Failures read as "no".
pub fn prefers_dark(window: &Window) -> bool {
    match window.match_media(PREFERS_DARK_QUERY) {
        Ok(Some(mq)) => mq.matches(),
        Ok(None) | Err(_) => false,
    }
}

/// Theme preference backed by `window.localStorage`.
///
/// Storage that is disabled (private browsing, blocked cookies) behaves as
/// an empty store that rejects writes.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("theme: localStorage unavailable: {}", EnhanceError::from(err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(_) => None,
        }
    }

    fn save(&mut self, key: &str, value: &str) -> bool {
        match &self.storage {
            Some(storage) => storage.set_item(key, value).is_ok(),
            None => false,
        }
    }
}
