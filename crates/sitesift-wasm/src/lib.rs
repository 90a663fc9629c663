//! Sitesift WASM Runtime
//!
//! Browser-side live search: loads the serialized index once per session,
//! answers queries synchronously on every keystroke, and reports query
//! analytics through a debounced, optional sink.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { mountSearch } from 'sitesift-wasm';
//!
//! await init();
//! await mountSearch('/search-index.json', window.umami ?? null);
//! ```

pub mod analytics;
pub mod controller;
pub mod debounce;
pub mod loader;

pub use analytics::{AnalyticsSink, JsAnalytics, SearchReport};
pub use controller::{
    plan_render, ControllerConfig, RenderPlan, SearchController, DEBOUNCE_MS, MIN_QUERY_CHARS,
};
pub use loader::{load_index, LoadError};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up the panic hook and console logger for readable diagnostics in
/// the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Get the version of the search runtime.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
