//! Live search controller.
//!
//! Binds a text input to the query engine: the index is fetched once per
//! session, every keystroke runs a synchronous search against it, and a
//! debounced side channel reports query analytics. The lifecycle is an
//! explicit Loading -> Ready split: until the index load resolves the input
//! is inert, and nothing typed before readiness is buffered.

use std::{cell::RefCell, rc::Rc};

use sitesift_index::{search, Query, QueryMode, SearchHit, SearchIndex};
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::{
    analytics::{self, AnalyticsSink, JsAnalytics, SearchReport},
    debounce::{BrowserTimers, Debouncer},
    loader,
};

/// Quiet period before an analytics report is emitted.
pub const DEBOUNCE_MS: u32 = 750;

/// Inputs shorter than this always take the results rendering path.
pub const MIN_QUERY_CHARS: usize = 2;

/// Element ids and index location for a controller instance.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// URL of the serialized index artifact.
    pub index_url: String,

    /// Id of the text input element.
    pub input_id: String,

    /// Id of the result list container.
    pub results_id: String,

    /// Id of the "no results" indicator.
    pub no_results_id: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            index_url: "/search-index.json".to_string(),
            input_id: "searchField".to_string(),
            results_id: "searchResults".to_string(),
            no_results_id: "noResultsFound".to_string(),
        }
    }
}

/// What one input event renders.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// Hide the indicator and render these hits (possibly none).
    Results(Vec<SearchHit>),
    /// Show the "no results" indicator.
    NoResults,
}

/// Decide the rendering path for an input value and its hits.
///
/// The guard is asymmetric on purpose: an input under two characters takes
/// the results path even with zero hits, so the indicator never flashes
/// while the user types the first character. Do not simplify this into an
/// always-show-empty-state rule.
pub fn plan_render(raw_input: &str, query: &Query, hits: Vec<SearchHit>) -> RenderPlan {
    if query.is_empty() || raw_input.chars().count() < MIN_QUERY_CHARS || !hits.is_empty() {
        RenderPlan::Results(hits)
    } else {
        RenderPlan::NoResults
    }
}

/// A mounted live search session.
///
/// Holds the loaded index (read-only for the session), the optional
/// analytics sink, and the single-slot debounce timer.
pub struct SearchController {
    index: SearchIndex,
    sink: Option<Rc<dyn AnalyticsSink>>,
    debouncer: Debouncer<BrowserTimers>,
    results: Element,
    no_results: HtmlElement,
}

impl SearchController {
    /// Fetch the index, then bind the input.
    ///
    /// On fetch or parse failure the controller degrades instead of leaving
    /// the page silently inert: the input is disabled and a message is
    /// rendered in the results container.
    pub async fn mount(
        config: ControllerConfig,
        sink: Option<Rc<dyn AnalyticsSink>>,
    ) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let input: HtmlInputElement = element_by_id(&document, &config.input_id)?;
        let results: Element = element_by_id(&document, &config.results_id)?;
        let no_results: HtmlElement = element_by_id(&document, &config.no_results_id)?;

        // Loading: keystrokes have no effect until this resolves.
        let index = match loader::load_index(&config.index_url).await {
            Ok(index) => index,
            Err(e) => {
                log::error!("search index load failed: {e}");
                input.set_disabled(true);
                results.set_text_content(Some("Search is unavailable."));
                return Ok(());
            }
        };

        log::info!(
            "search index ready: {} documents, {} terms",
            index.document_count(),
            index.term_count()
        );

        // Ready: only now does the controller listen for input.
        let controller = Rc::new(RefCell::new(Self {
            index,
            sink,
            debouncer: Debouncer::new(BrowserTimers, DEBOUNCE_MS),
            results,
            no_results,
        }));

        let source = input.clone();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let value = source.value();
            if let Err(e) = controller.borrow_mut().handle_input(&value) {
                log::error!("search render failed: {e:?}");
            }
        });
        input.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())?;
        // The listener lives for the page lifetime.
        handler.forget();

        Ok(())
    }

    /// Handle one input event: search, render, restart the report timer.
    ///
    /// The search and render are synchronous; only the analytics report is
    /// debounced, and only the last event in a window reports.
    pub fn handle_input(&mut self, value: &str) -> Result<(), JsValue> {
        let query = Query::parse(value, QueryMode::Or, true);
        let hits = search(&self.index, &query);
        let count = hits.len();

        self.render(&plan_render(value, &query, hits))?;

        let report = SearchReport {
            count,
            search_term: value.to_string(),
        };
        let sink = self.sink.clone();
        self.debouncer
            .debounce(move || analytics::report(sink.as_deref(), &report));

        Ok(())
    }

    /// Replace the rendered result list according to the plan.
    fn render(&self, plan: &RenderPlan) -> Result<(), JsValue> {
        self.results.set_inner_html("");

        match plan {
            RenderPlan::NoResults => {
                self.no_results.style().set_property("display", "block")?;
            }
            RenderPlan::Results(hits) => {
                self.no_results.style().set_property("display", "none")?;

                let document = self
                    .results
                    .owner_document()
                    .ok_or_else(|| JsValue::from_str("detached results element"))?;
                for hit in hits {
                    self.results.append_child(&result_item(&document, hit)?.into())?;
                }
            }
        }

        Ok(())
    }
}

/// Build one result list item: a titled link and a description line.
fn result_item(document: &Document, hit: &SearchHit) -> Result<Element, JsValue> {
    let item = document.create_element("li")?;
    item.set_class_name("search-result-item");

    let header = document.create_element("div")?;
    header.set_class_name("search-result-header");

    let link = document.create_element("a")?;
    link.set_attribute("href", &hit.reference)?;
    link.set_text_content(Some(&hit.title));
    header.append_child(&link)?;
    item.append_child(&header)?;

    let description = document.create_element("div")?;
    description.set_text_content(Some(&hit.description));
    item.append_child(&description)?;

    Ok(item)
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has unexpected type")))
}

/// Mount the live search controller from JavaScript.
///
/// `analytics` is an optional `track(event, payload)`-shaped object (umami
/// and friends); pass `null` to disable external reporting.
#[wasm_bindgen(js_name = mountSearch)]
pub async fn mount_search(
    index_url: Option<String>,
    analytics: Option<js_sys::Object>,
) -> Result<(), JsValue> {
    let mut config = ControllerConfig::default();
    if let Some(url) = index_url {
        config.index_url = url;
    }

    let sink = analytics.map(|target| Rc::new(JsAnalytics::new(target)) as Rc<dyn AnalyticsSink>);
    SearchController::mount(config, sink).await
}
