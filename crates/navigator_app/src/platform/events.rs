use navigator_core::{route_link_click, LinkClick, Msg};
use navigator_logging::nav_debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, PopStateEvent, Window};

use super::app::dispatch;
use super::dom::entry_from_js;

/// Registers the document click interceptor and the history subscription.
///
/// Called once at startup; the closures live for the lifetime of the page.
pub(super) fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    let link_handler = Closure::<dyn FnMut(MouseEvent)>::new(on_click);
    document.add_event_listener_with_callback("click", link_handler.as_ref().unchecked_ref())?;
    link_handler.forget();

    let popstate_handler = Closure::<dyn FnMut(PopStateEvent)>::new(on_popstate);
    window.add_event_listener_with_callback(
        "popstate",
        popstate_handler.as_ref().unchecked_ref(),
    )?;
    popstate_handler.forget();

    Ok(())
}

fn on_click(event: MouseEvent) {
    if let Some(msg) = link_click_msg(&event) {
        event.prevent_default();
        dispatch(msg);
    }
}

/// Classifies a click on the document, returning the navigation it asks for.
///
/// `None` means the browser should handle the click itself.
pub fn link_click_msg(event: &MouseEvent) -> Option<Msg> {
    if event.default_prevented() {
        return None;
    }
    let anchor = clicked_anchor(event)?;

    let page = anchor.get_attribute("data-page");
    let post = anchor.get_attribute("data-post");
    let target = anchor.get_attribute("target");
    let click = LinkClick {
        page: page.as_deref(),
        post: post.as_deref(),
        target: target.as_deref(),
        download: anchor.has_attribute("download"),
        button: event.button(),
        modified: event.ctrl_key() || event.meta_key() || event.shift_key() || event.alt_key(),
    };
    route_link_click(&click)
}

fn clicked_anchor(event: &MouseEvent) -> Option<Element> {
    let target = event.target()?;
    let element = target.dyn_into::<Element>().ok()?;
    element.closest("a").ok().flatten()
}

fn on_popstate(event: PopStateEvent) {
    let entry = entry_from_js(&event.state());
    if entry.is_none() {
        nav_debug!("popstate without navigator state");
    }
    dispatch(Msg::HistoryRestored(entry));
}
