use crate::{NavEntry, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Record a new session history entry for a user-initiated navigation.
    PushHistory { entry: NavEntry, url: String },
    /// Attach state to the current session history entry, keeping its URL.
    ReplaceHistory { entry: NavEntry },
    /// Issue a single GET for the fragment at `path`.
    Fetch { request_id: RequestId, path: String },
    /// Swap the content region for a freshly loaded fragment.
    ReplaceContent { body: String },
}
