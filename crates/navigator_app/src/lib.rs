//! Navigator app: wires the navigator to the browser's DOM and history.
//!
//! Build with `wasm-pack build crates/navigator_app --target web`; the module
//! starts itself and exports `openPage` and `openPost` for inline handlers.
pub mod config;
mod error;
#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use config::{ConfigError, SiteConfig, CONFIG_ELEMENT_ID};
pub use error::AppError;
