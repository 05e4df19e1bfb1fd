use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub body: String,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    /// Site path exactly as requested.
    pub path: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub byte_len: u64,
    pub encoding: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidPath,
    HttpStatus(u16),
    /// Only raised when a fragment size limit was configured.
    TooLarge { max_bytes: u64, actual: u64 },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidPath => write!(f, "invalid path"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "fragment too large (max {max_bytes}, actual {actual})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failure while driving the browser history or the document.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("history state could not be encoded: {0}")]
    State(#[from] serde_json::Error),
    #[error("platform call failed: {0}")]
    Platform(String),
}
