use std::rc::Rc;

use navigator_engine::{load_fragment, FragmentRequest, ReqwestFetcher};
use wasm_bindgen_futures::spawn_local;

use super::app::dispatch;

/// Runs each request on the browser's event loop.
///
/// Requests are neither serialized nor cancelled; each completion is
/// dispatched whenever its response arrives.
pub(super) fn spawn_fetches(fetcher: Rc<ReqwestFetcher>, requests: Vec<FragmentRequest>) {
    for request in requests {
        let fetcher = fetcher.clone();
        spawn_local(async move {
            let msg = load_fragment(fetcher.as_ref(), request).await;
            dispatch(msg);
        });
    }
}
