//! HTTP Bindings
//!
//! Fetch wrappers for the Ecoleta backend and the IBGE localidades API,
//! organized by service.

mod ibge;
mod items;
mod points;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::error::FetchError;

// Re-export all public items
pub use ibge::*;
pub use items::*;
pub use points::*;

/// GET a JSON document. Non-2xx responses are errors.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
