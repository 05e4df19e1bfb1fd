use navigator_engine::FetchError;

use crate::ConfigError;

/// Reasons the navigator cannot attach to a page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no {0} object")]
    MissingGlobal(&'static str),
    #[error("no element matches {0}")]
    MissingElement(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("browser call failed: {0}")]
    Browser(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Browser(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
