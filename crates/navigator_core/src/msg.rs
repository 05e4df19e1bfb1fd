use crate::{NavEntry, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Navigate to a logical page; an empty name means the default page.
    OpenPage(String),
    /// Navigate to a blog post by its literal site path.
    OpenPost(String),
    /// The browser moved backward or forward through session history.
    /// `None` when the entry carried no navigator state.
    HistoryRestored(Option<NavEntry>),
    /// A fragment request completed successfully.
    FragmentLoaded { request_id: RequestId, body: String },
    /// A fragment request failed; the displayed content stays as it is.
    FragmentFailed { request_id: RequestId, reason: String },
    /// The script started on a server-rendered page. `location` is the path
    /// plus any query and fragment, as shown in the address bar.
    Mounted { location: String },
    /// Fallback for ignored events.
    NoOp,
}
