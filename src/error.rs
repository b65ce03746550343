//! Fetch Errors
//!
//! Failures of backend, IBGE and browser calls.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),
    #[error("{url} responded with HTTP {status}")]
    Status { status: u16, url: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    /// A browser API (FormData, Blob, ...) rejected the call
    #[error("browser error: {0}")]
    Browser(String),
}

impl FetchError {
    pub(crate) fn browser(err: wasm_bindgen::JsValue) -> Self {
        Self::Browser(format!("{:?}", err))
    }
}
