//! Browser bindings: the three ports over `document`, `localStorage` and
//! `location`, plus a [`WebToggler`] exported to JavaScript.
//!
//! ```javascript,ignore
//! const toggler = new WebToggler('toggleable_div_',
//!   { 'border-color': 'steelblue' }, { 'border-color': 'lightgray' },
//!   { about: 'toggleable_div_about', all: 'all' });
//! button.onclick = () => toggler.expandUniquely('toggleable_div_about');
//! ```

use crate::core::toggler::{Toggler, TogglerOptions};
use crate::domain::model::{ControlStyle, Shorthands, Visibility};
use crate::domain::ports::{ElementDirectory, KeyValueStore, NavigationSource};
use crate::utils::error::{Result, TogglerError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Storage};

pub struct DomDirectory {
    document: Document,
}

impl DomDirectory {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }
}

impl ElementDirectory for DomDirectory {
    fn ids_by_tag(&self, tag: &str) -> Vec<String> {
        let collection = self.document.get_elements_by_tag_name(tag);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(|e| e.id())
            .collect()
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn visibility(&self, id: &str) -> Option<Visibility> {
        let element = self.html_element(id)?;
        let display = element.style().get_property_value("display").unwrap_or_default();
        Some(if display == "block" {
            Visibility::Shown
        } else {
            Visibility::Hidden
        })
    }

    fn set_visibility(&mut self, id: &str, visibility: Visibility) -> bool {
        let display = match visibility {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        };
        self.set_style(id, "display", display)
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) -> bool {
        match self.html_element(id) {
            Some(element) => element.style().set_property(property, value).is_ok(),
            None => false,
        }
    }
}

/// `localStorage`, or nothing when the browser refuses access.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &web_sys::Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage.as_ref().ok_or_else(|| TogglerError::StoreUnavailable {
            message: "localStorage is not available".to_string(),
        })
    }
}

fn js_error(value: JsValue) -> TogglerError {
    TogglerError::StoreUnavailable {
        message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}

pub struct LocationNavigation {
    address: String,
    search: String,
}

impl LocationNavigation {
    pub fn new(window: &web_sys::Window, document: &Document) -> Self {
        Self {
            address: document.url().unwrap_or_default(),
            search: window.location().search().unwrap_or_default(),
        }
    }

    fn pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        url::form_urlencoded::parse(self.search.trim_start_matches('?').as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
    }
}

impl NavigationSource for LocationNavigation {
    fn address(&self) -> String {
        self.address.clone()
    }

    fn has_parameter(&self, name: &str) -> bool {
        self.pairs().any(|(key, _)| key == name)
    }

    fn parameter(&self, name: &str) -> Option<String> {
        self.pairs().find(|(key, _)| key == name).map(|(_, value)| value)
    }
}

/// Reads a plain JS object into ordered string pairs.
fn object_entries(value: &JsValue) -> Vec<(String, String)> {
    if !value.is_object() {
        return Vec::new();
    }
    let object: &js_sys::Object = value.unchecked_ref();
    js_sys::Object::entries(object)
        .iter()
        .filter_map(|entry| {
            let pair: js_sys::Array = entry.dyn_into().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

#[wasm_bindgen]
pub struct WebToggler {
    inner: Toggler<DomDirectory, LocalStorage>,
}

#[wasm_bindgen]
impl WebToggler {
    /// `selected` / `deselected` are style objects keyed by CSS property
    /// name; `shorthands` maps query parameter names to section ids,
    /// `"all"` or `"none"`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        prefix: &str,
        selected: &JsValue,
        deselected: &JsValue,
        shorthands: &JsValue,
    ) -> std::result::Result<WebToggler, JsValue> {
        let style = ControlStyle::new(object_entries(selected), object_entries(deselected));
        Self::build(TogglerOptions::new(prefix, style, shorthand_map(shorthands)))
    }

    /// Older form: two border colors with the stock button look.
    #[wasm_bindgen(js_name = withColors)]
    pub fn with_colors(
        prefix: &str,
        select_color: &str,
        deselect_color: &str,
        shorthands: &JsValue,
    ) -> std::result::Result<WebToggler, JsValue> {
        let style = ControlStyle::from_colors(select_color, deselect_color);
        Self::build(
            TogglerOptions::new(prefix, style, shorthand_map(shorthands))
                .with_legacy_memory_key(),
        )
    }

    pub fn toggle(&mut self, id: &str) {
        self.inner.toggle(id);
    }

    #[wasm_bindgen(js_name = expandUniquely)]
    pub fn expand_uniquely(&mut self, id: &str) {
        self.inner.expand_uniquely(id);
    }

    #[wasm_bindgen(js_name = expandAll)]
    pub fn expand_all(&mut self) {
        self.inner.expand_all();
    }

    #[wasm_bindgen(js_name = collapseAll)]
    pub fn collapse_all(&mut self) {
        self.inner.collapse_all();
    }
}

impl WebToggler {
    fn build(options: TogglerOptions) -> std::result::Result<WebToggler, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let navigation = LocationNavigation::new(&window, &document);
        let store = LocalStorage::from_window(&window);
        let directory = DomDirectory::new(document);

        Ok(WebToggler {
            inner: Toggler::new(options, directory, store, &navigation),
        })
    }
}

fn shorthand_map(value: &JsValue) -> Shorthands {
    object_entries(value).into_iter().collect()
}
