use std::cell::RefCell;
use std::rc::Rc;

use navigator_core::Msg;
use navigator_engine::{Navigator, ReqwestFetcher};
use navigator_logging::{nav_info, nav_warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use super::dom::{BrowserContent, BrowserHistory};
use super::{effects, events};
use crate::{AppError, SiteConfig, CONFIG_ELEMENT_ID};

struct App {
    navigator: Navigator<BrowserHistory, BrowserContent>,
    fetcher: Rc<ReqwestFetcher>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Module entry point, run by the browser once the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    mount().map_err(JsValue::from)
}

fn mount() -> Result<(), AppError> {
    let window = web_sys::window().ok_or(AppError::MissingGlobal("window"))?;
    let document = window.document().ok_or(AppError::MissingGlobal("document"))?;

    let config = SiteConfig::load(read_config_text(&document).as_deref());
    navigator_logging::initialize_console(config.log_level());

    let location = window.location();
    let base_url = config.base_url(&location.origin()?)?;
    let fetcher = ReqwestFetcher::new(base_url, config.fetch_settings())?;

    let nav = document
        .query_selector(&config.nav_selector)?
        .ok_or_else(|| AppError::MissingElement(config.nav_selector.clone()))?;

    let navigator = Navigator::new(
        BrowserHistory::new(window.history()?),
        BrowserContent::new(document.clone(), nav, config.content_id.clone()),
    );
    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            navigator,
            fetcher: Rc::new(fetcher),
        });
    });

    events::install(&window, &document)?;

    nav_info!(
        "Navigator started base_url={} content_id={}",
        config.base_url.as_deref().unwrap_or("<origin>"),
        config.content_id
    );
    let current = format!(
        "{}{}{}",
        location.pathname()?,
        location.search()?,
        location.hash()?
    );
    dispatch(Msg::Mounted { location: current });
    Ok(())
}

/// Loads the page `page_name` (the default page when empty) into the content region.
#[wasm_bindgen(js_name = openPage)]
pub fn open_page(page_name: &str) {
    dispatch(Msg::OpenPage(page_name.to_string()));
}

/// Loads the post served at `post_path` into the content region.
#[wasm_bindgen(js_name = openPost)]
pub fn open_post(post_path: &str) {
    dispatch(Msg::OpenPost(post_path.to_string()));
}

/// Feeds a message to the navigator and schedules any fetches it asks for.
pub(super) fn dispatch(msg: Msg) {
    let scheduled = APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        match slot.as_mut() {
            Some(app) => Some((app.fetcher.clone(), app.navigator.dispatch(msg))),
            None => {
                nav_warn!("Navigator used before start; dropping {:?}", msg);
                None
            }
        }
    });

    if let Some((fetcher, requests)) = scheduled {
        effects::spawn_fetches(fetcher, requests);
    }
}

fn read_config_text(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
}
