//! Query analytics reporting.
//!
//! The sink is an injected, optional capability: the host page hands the
//! controller a `track(event, payload)`-shaped object at construction, or
//! nothing at all. Reporting is strictly best-effort; no sink failure ever
//! reaches the search or render path.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// Event name used for search reports.
pub const SEARCH_EVENT: &str = "search";

/// Payload reported after a debounce window closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Number of hits rendered for the query.
    pub count: usize,

    /// The raw input value at event time.
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// An external tracking capability.
pub trait AnalyticsSink {
    /// Report a named event. Errors are signalled, not thrown; the caller
    /// logs and continues.
    fn track(&self, event: &str, report: &SearchReport) -> Result<(), String>;
}

/// Report to an optional sink, logging locally either way.
///
/// A missing sink or a failing sink degrades to a local log line; it never
/// interrupts the input flow.
pub fn report(sink: Option<&dyn AnalyticsSink>, report: &SearchReport) {
    log::info!(
        "search analytics: count={} searchTerm={:?}",
        report.count,
        report.search_term
    );

    match sink {
        Some(sink) => {
            if let Err(e) = sink.track(SEARCH_EVENT, report) {
                log::error!("analytics sink failed: {e}");
            }
        }
        None => log::debug!("tracking is not enabled"),
    }
}

/// Adapter over a JS object exposing a `track(event, payload)` function.
pub struct JsAnalytics {
    target: js_sys::Object,
}

impl JsAnalytics {
    /// Wrap a tracking object supplied by the host page.
    pub fn new(target: js_sys::Object) -> Self {
        Self { target }
    }
}

impl AnalyticsSink for JsAnalytics {
    fn track(&self, event: &str, report: &SearchReport) -> Result<(), String> {
        let track = js_sys::Reflect::get(&self.target, &JsValue::from_str("track"))
            .map_err(|e| format!("{e:?}"))?;
        let track: js_sys::Function = track
            .dyn_into()
            .map_err(|_| "track is not a function".to_string())?;

        let payload =
            serde_wasm_bindgen::to_value(report).map_err(|e| e.to_string())?;

        // A throwing sink surfaces here as Err and stays local.
        track
            .call2(&self.target, &JsValue::from_str(event), &payload)
            .map_err(|e| format!("{e:?}"))?;
        Ok(())
    }
}
