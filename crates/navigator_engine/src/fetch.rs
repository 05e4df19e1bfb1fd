use navigator_logging::nav_warn;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::decode::decode_fragment;
use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput};

/// Header the fragment server uses to tell in-page loads from full page loads.
pub const REQUESTED_WITH: &str = "X-Requested-With";

#[derive(Debug, Clone, Default)]
pub struct FetchSettings {
    /// Upper bound on a fragment body; `None` accepts any size.
    pub max_bytes: Option<u64>,
}

/// Loads HTML fragments by site path.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Fetcher {
    async fn fetch(&self, path: &str) -> Result<FetchOutput, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    base_url: Url,
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(base_url: Url, settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            base_url,
            settings,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a site path the way the browser would resolve an href.
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        if path.is_empty() {
            return Err(FetchError::new(FailureKind::InvalidPath, "empty path"));
        }
        self.base_url
            .join(path)
            .map_err(|err| FetchError::new(FailureKind::InvalidPath, err.to_string()))
    }

    fn check_size(&self, actual: u64) -> Result<(), FetchError> {
        match self.settings.max_bytes {
            Some(max_bytes) if actual > max_bytes => Err(FetchError::new(
                FailureKind::TooLarge { max_bytes, actual },
                "fragment too large",
            )),
            _ => Ok(()),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, path: &str) -> Result<FetchOutput, FetchError> {
        let url = self.resolve(path)?;

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/html")
            .header(REQUESTED_WITH, "XMLHttpRequest")
            .send()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        if let Some(content_len) = response.content_length() {
            self.check_size(content_len)?;
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        let byte_len = bytes.len() as u64;
        self.check_size(byte_len)?;

        let decoded = decode_fragment(&bytes, content_type.as_deref());
        if decoded.replaced_malformed {
            nav_warn!(
                "Fragment {} had malformed {} bytes; showing it with replacements",
                path,
                decoded.encoding_label
            );
        }

        Ok(FetchOutput {
            body: decoded.text,
            metadata: FetchMetadata {
                path: path.to_string(),
                final_url,
                content_type,
                byte_len,
                encoding: decoded.encoding_label,
            },
        })
    }
}
