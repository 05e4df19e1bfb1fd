use log::LevelFilter;
use navigator_engine::FetchSettings;
use navigator_logging::nav_warn;
use serde::Deserialize;
use url::Url;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "navigator-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed navigator config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("invalid base url {url}: {message}")]
    BaseUrl { url: String, message: String },
}

/// Site-level settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Where fragments are served from; the page origin when unset.
    pub base_url: Option<String>,
    /// CSS selector of the navigation bar the content region follows.
    pub nav_selector: String,
    /// Id given to the content region.
    pub content_id: String,
    pub log_level: String,
    /// Optional cap on fragment size; unbounded when unset.
    pub max_fragment_bytes: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            nav_selector: "nav".to_string(),
            content_id: "content".to_string(),
            log_level: "info".to_string(),
            max_fragment_bytes: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.nav_selector.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "nav_selector",
            });
        }
        if config.content_id.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "content_id",
            });
        }
        Ok(config)
    }

    /// Parses the embedded config text, falling back to defaults when it is
    /// absent, blank or invalid.
    pub fn load(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|text| !text.is_empty()) {
            None => Self::default(),
            Some(text) => Self::from_json(text).unwrap_or_else(|err| {
                nav_warn!("Ignoring navigator config: {}", err);
                Self::default()
            }),
        }
    }

    pub fn base_url(&self, origin: &str) -> Result<Url, ConfigError> {
        let raw = self.base_url.as_deref().unwrap_or(origin);
        Url::parse(raw).map_err(|err| ConfigError::BaseUrl {
            url: raw.to_string(),
            message: err.to_string(),
        })
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            max_bytes: self.max_fragment_bytes,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        navigator_logging::parse_level(&self.log_level)
    }
}
