//! One-time index fetch and deserialization.
//!
//! The index is fetched over a plain GET at session start and held for the
//! session's lifetime; there is no refresh short of a page reload, and no
//! retry: the load either succeeds or the controller enters its degraded
//! state.

use gloo_net::http::Request;
use sitesift_index::SearchIndex;
use wasm_bindgen::JsValue;

/// Error type for index loading.
#[derive(Debug)]
pub enum LoadError {
    /// Network error.
    Network(String),
    /// Index deserialization error.
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Network(e) => write!(f, "Network error: {e}"),
            LoadError::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl From<LoadError> for JsValue {
    fn from(err: LoadError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Fetch and deserialize the serialized index.
pub async fn load_index(index_url: &str) -> Result<SearchIndex, LoadError> {
    let response = Request::get(index_url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Network(format!(
            "Failed to fetch index: HTTP {}",
            response.status()
        )));
    }

    let json = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    SearchIndex::from_json(&json).map_err(|e| LoadError::Parse(e.to_string()))
}
