//! Navigator engine: fragment fetching and effect execution.
mod decode;
mod fetch;
mod navigator;
mod types;

pub use decode::{decode_fragment, DecodedFragment};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, REQUESTED_WITH};
pub use navigator::{load_fragment, ContentPort, FragmentRequest, HistoryPort, Navigator};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput, PortError};
