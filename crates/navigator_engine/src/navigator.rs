use navigator_core::{update, Effect, Msg, NavEntry, NavState, NavViewModel, RequestId};
use navigator_logging::{nav_debug, nav_info, nav_warn};

use crate::{Fetcher, PortError};

/// Browser session history as seen by the navigator.
pub trait HistoryPort {
    fn push(&self, entry: &NavEntry, url: &str) -> Result<(), PortError>;
    /// Stores `entry` on the current history entry without touching its URL.
    fn replace(&self, entry: &NavEntry) -> Result<(), PortError>;
}

/// The document region that displays the current page or post.
pub trait ContentPort {
    /// Removes the current content region and installs `body` in its place.
    fn replace_content(&self, body: &str) -> Result<(), PortError>;
    /// Reflects navigator state that is not content, such as a loading marker.
    fn render(&self, view: &NavViewModel) -> Result<(), PortError>;
}

/// A fetch the caller must run and feed back through [`Navigator::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRequest {
    pub request_id: RequestId,
    pub path: String,
}

/// Owns navigator state and executes its synchronous effects.
///
/// Fetches are handed back to the caller so it can schedule them on whatever
/// executor the platform offers.
pub struct Navigator<H, C> {
    state: NavState,
    history: H,
    content: C,
}

impl<H: HistoryPort, C: ContentPort> Navigator<H, C> {
    pub fn new(history: H, content: C) -> Self {
        Self {
            state: NavState::new(),
            history,
            content,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn open_page(&mut self, page_name: &str) -> Vec<FragmentRequest> {
        self.dispatch(Msg::OpenPage(page_name.to_string()))
    }

    pub fn open_post(&mut self, post_path: &str) -> Vec<FragmentRequest> {
        self.dispatch(Msg::OpenPost(post_path.to_string()))
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<FragmentRequest> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let mut requests = Vec::new();
        for effect in effects {
            match effect {
                Effect::PushHistory { entry, url } => {
                    nav_info!("Navigate url={}", url);
                    if let Err(err) = self.history.push(&entry, &url) {
                        nav_warn!("pushState for {} failed: {}", url, err);
                    }
                }
                Effect::ReplaceHistory { entry } => {
                    if let Err(err) = self.history.replace(&entry) {
                        nav_warn!("replaceState for {:?} failed: {}", entry, err);
                    }
                }
                Effect::Fetch { request_id, path } => {
                    nav_debug!("Fetch request_id={} path={}", request_id, path);
                    requests.push(FragmentRequest { request_id, path });
                }
                Effect::ReplaceContent { body } => {
                    nav_debug!("ReplaceContent body_len={}", body.len());
                    if let Err(err) = self.content.replace_content(&body) {
                        nav_warn!("Content replacement failed: {}", err);
                    }
                }
            }
        }

        if self.state.consume_dirty() {
            if let Err(err) = self.content.render(&self.state.view()) {
                nav_warn!("Render failed: {}", err);
            }
        }

        requests
    }
}

/// Runs one fragment request and turns the outcome into a message.
///
/// Failures are logged and reported as [`Msg::FragmentFailed`], which leaves
/// the displayed content untouched.
pub async fn load_fragment(fetcher: &dyn Fetcher, request: FragmentRequest) -> Msg {
    match fetcher.fetch(&request.path).await {
        Ok(output) => {
            nav_debug!(
                "Loaded request_id={} path={} bytes={} encoding={}",
                request.request_id,
                request.path,
                output.metadata.byte_len,
                output.metadata.encoding
            );
            Msg::FragmentLoaded {
                request_id: request.request_id,
                body: output.body,
            }
        }
        Err(err) => {
            nav_warn!("Fragment {} failed: {}", request.path, err);
            Msg::FragmentFailed {
                request_id: request.request_id,
                reason: err.to_string(),
            }
        }
    }
}
