use serde::{Deserialize, Serialize};

/// Page shown when a navigation names no page at all.
pub const DEFAULT_PAGE: &str = "home";

/// What a session history entry displays.
///
/// Stored in the browser history state as internally tagged JSON, e.g.
/// `{"kind":"page","page_name":"about"}` or `{"kind":"post","post_path":"/posts/x"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavEntry {
    Page { page_name: String },
    Post { post_path: String },
}

impl NavEntry {
    /// Builds a page entry, substituting [`DEFAULT_PAGE`] for an empty name.
    pub fn page(name: impl Into<String>) -> Self {
        let name = name.into();
        let page_name = if name.is_empty() {
            DEFAULT_PAGE.to_string()
        } else {
            name
        };
        Self::Page { page_name }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::Post {
            post_path: path.into(),
        }
    }

    /// Site path the fragment is served from; also the URL shown in the address bar.
    pub fn path(&self) -> String {
        match self {
            Self::Page { page_name } => format!("/{page_name}/"),
            Self::Post { post_path } => post_path.clone(),
        }
    }

    /// Maps a location pathname back to the entry that would have produced it.
    ///
    /// Any query or fragment is ignored. `/` is the default page, a single
    /// segment with a trailing slash is a page, and anything else is taken
    /// literally as a post path.
    pub fn from_location_path(location: &str) -> Self {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        if path.is_empty() || path == "/" {
            return Self::page(DEFAULT_PAGE);
        }
        match path
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'))
        {
            Some(segment) if !segment.is_empty() && !segment.contains('/') => {
                Self::page(segment)
            }
            _ => Self::post(path),
        }
    }

    pub fn to_state_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_state_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

