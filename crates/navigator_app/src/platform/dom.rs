use navigator_core::{NavEntry, NavViewModel};
use navigator_engine::{ContentPort, HistoryPort, PortError};
use navigator_logging::nav_warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, History};

const BUSY_ATTRIBUTE: &str = "aria-busy";

fn js_error(err: JsValue) -> PortError {
    PortError::Platform(format!("{err:?}"))
}

/// Converts an entry into the plain object stored as history state.
pub fn entry_to_js(entry: &NavEntry) -> Result<JsValue, PortError> {
    let json = entry.to_state_json()?;
    js_sys::JSON::parse(&json).map_err(js_error)
}

/// Reads a navigator entry back out of history state.
///
/// Returns `None` for entries this script did not create.
pub fn entry_from_js(state: &JsValue) -> Option<NavEntry> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    let json = js_sys::JSON::stringify(state).ok()?.as_string()?;
    match NavEntry::from_state_json(&json) {
        Ok(entry) => Some(entry),
        Err(err) => {
            nav_warn!("Ignoring foreign history state {}: {}", json, err);
            None
        }
    }
}

pub struct BrowserHistory {
    history: History,
}

impl BrowserHistory {
    pub fn new(history: History) -> Self {
        Self { history }
    }
}

impl HistoryPort for BrowserHistory {
    fn push(&self, entry: &NavEntry, url: &str) -> Result<(), PortError> {
        let state = entry_to_js(entry)?;
        self.history
            .push_state_with_url(&state, "", Some(url))
            .map_err(js_error)
    }

    fn replace(&self, entry: &NavEntry) -> Result<(), PortError> {
        let state = entry_to_js(entry)?;
        self.history.replace_state(&state, "").map_err(js_error)
    }
}

/// The content region living directly after the navigation element.
///
/// Fragments carry their own region container; the navigator only removes
/// the old one and inserts the new markup.
pub struct BrowserContent {
    document: Document,
    nav: Element,
    content_id: String,
}

impl BrowserContent {
    pub fn new(document: Document, nav: Element, content_id: String) -> Self {
        Self {
            document,
            nav,
            content_id,
        }
    }
}

impl ContentPort for BrowserContent {
    fn replace_content(&self, body: &str) -> Result<(), PortError> {
        while let Some(old) = self.document.get_element_by_id(&self.content_id) {
            old.remove();
        }
        self.nav
            .insert_adjacent_html("afterend", body)
            .map_err(js_error)
    }

    fn render(&self, view: &NavViewModel) -> Result<(), PortError> {
        if view.loading {
            self.nav
                .set_attribute(BUSY_ATTRIBUTE, "true")
                .map_err(js_error)
        } else {
            self.nav.remove_attribute(BUSY_ATTRIBUTE).map_err(js_error)
        }
    }
}
