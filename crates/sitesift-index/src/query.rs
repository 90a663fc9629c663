//! Query evaluation over a loaded index.
//!
//! Terms are tokenized with the same rule as build time, matched per field
//! (optionally with prefix expansion), combined across terms by boolean
//! mode, scored by term frequency, and ranked with a stable tie-break on
//! document insertion order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sitesift_core::tokenize;

use crate::index::SearchIndex;

/// Maximum number of results returned by a search.
pub const RESULT_LIMIT: usize = 50;

/// Boolean combination mode for multi-term queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryMode {
    /// A document matches if it contains any term in any field.
    #[default]
    Or,
    /// A document matches only if every term matches in at least one field.
    And,
}

/// A parsed query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Normalized query terms.
    pub terms: Vec<String>,

    /// Boolean combination mode.
    pub mode: QueryMode,

    /// Whether a term also matches indexed tokens it is a prefix of.
    pub expand: bool,
}

impl Query {
    /// Parse an input string with the shared tokenization rule.
    pub fn parse(input: &str, mode: QueryMode, expand: bool) -> Self {
        Self {
            terms: tokenize(input),
            mode,
            expand,
        }
    }

    /// Check if the query has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A single ranked result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document reference, used as the result link target.
    pub reference: String,

    /// Document title.
    pub title: String,

    /// Document description.
    pub description: String,

    /// Relevance score (higher is better).
    pub score: f32,
}

/// Per-field score multipliers.
///
/// The default weights every field equally, matching the baseline ranking
/// behavior. [`FieldWeights::boosted`] is the opt-in alternative; weighting
/// is never applied silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub title: f32,
    pub description: f32,
    pub tags: f32,
    pub content: f32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 1.0,
            description: 1.0,
            tags: 1.0,
            content: 1.0,
        }
    }
}

impl FieldWeights {
    /// Title > description > tags > content.
    pub fn boosted() -> Self {
        Self {
            title: 4.0,
            description: 3.0,
            tags: 2.0,
            content: 1.0,
        }
    }

    fn for_field(&self, field: &str) -> f32 {
        match field {
            "title" => self.title,
            "description" => self.description,
            "tags" => self.tags,
            "content" => self.content,
            _ => 1.0,
        }
    }
}

/// Search the index with equal field weighting.
pub fn search(index: &SearchIndex, query: &Query) -> Vec<SearchHit> {
    search_weighted(index, query, &FieldWeights::default())
}

/// Search the index with explicit field weights.
///
/// An empty term list yields an empty result, never "match everything".
/// Unknown tokens contribute zero matches for their term; under [`QueryMode::And`]
/// that can empty the whole result, under [`QueryMode::Or`] other terms
/// still contribute. Absence of matches is a normal zero-length result.
pub fn search_weighted(
    index: &SearchIndex,
    query: &Query,
    weights: &FieldWeights,
) -> Vec<SearchHit> {
    if query.terms.is_empty() {
        return Vec::new();
    }

    // Per term: reference -> weighted term-frequency sum across fields. An
    // expanded term sums the tf of every token it is a prefix of.
    let mut per_term: Vec<HashMap<&str, f32>> = Vec::with_capacity(query.terms.len());
    for term in &query.terms {
        let mut hits: HashMap<&str, f32> = HashMap::new();

        for field in &index.fields {
            let Some(tokens) = index.postings.get(field) else {
                continue;
            };
            let weight = weights.for_field(field);

            if query.expand {
                for (token, refs) in tokens {
                    if token.starts_with(term.as_str()) {
                        for (reference, tf) in refs {
                            *hits.entry(reference.as_str()).or_insert(0.0) +=
                                weight * *tf as f32;
                        }
                    }
                }
            } else if let Some(refs) = tokens.get(term) {
                for (reference, tf) in refs {
                    *hits.entry(reference.as_str()).or_insert(0.0) += weight * *tf as f32;
                }
            }
        }

        per_term.push(hits);
    }

    // Combine per-term hit sets by boolean mode.
    let mut combined: HashMap<&str, f32> = HashMap::new();
    match query.mode {
        QueryMode::Or => {
            for hits in &per_term {
                for (reference, score) in hits {
                    *combined.entry(*reference).or_insert(0.0) += *score;
                }
            }
        }
        QueryMode::And => {
            if let Some((first, rest)) = per_term.split_first() {
                for (reference, score) in first {
                    if rest.iter().all(|hits| hits.contains_key(reference)) {
                        let total: f32 =
                            score + rest.iter().map(|hits| hits[reference]).sum::<f32>();
                        combined.insert(*reference, total);
                    }
                }
            }
        }
    }

    // Rank: descending score, ties broken by document insertion order.
    let ordinals: HashMap<&str, usize> = index
        .documents
        .iter()
        .enumerate()
        .map(|(pos, doc)| (doc.reference.as_str(), pos))
        .collect();

    let mut ranked: Vec<(usize, f32)> = combined
        .into_iter()
        .filter_map(|(reference, score)| ordinals.get(reference).map(|&pos| (pos, score)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(RESULT_LIMIT);

    ranked
        .into_iter()
        .map(|(pos, score)| {
            let doc = &index.documents[pos];
            SearchHit {
                reference: doc.reference.clone(),
                title: doc.title.clone(),
                description: doc.description.clone(),
                score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use sitesift_core::Document;

    use super::*;
    use crate::builder::build_index;

    fn doc(reference: &str, title: &str, content: &str) -> Document {
        Document::new(reference).with_title(title).with_content(content)
    }

    fn sample_index() -> SearchIndex {
        build_index([
            doc("/rust", "Learning Rust", "rust makes systems programming safe"),
            doc("/go", "Learning Go", "go makes servers simple"),
            doc("/zig", "Zig Notes", "zig is small"),
        ])
    }

    fn references(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.reference.as_str()).collect()
    }

    #[test]
    fn test_or_matches_any_term() {
        let index = sample_index();
        let hits = search(&index, &Query::parse("rust servers", QueryMode::Or, false));
        assert_eq!(references(&hits), vec!["/rust", "/go"]);
    }

    #[test]
    fn test_and_requires_every_term() {
        let index = sample_index();

        let hits = search(&index, &Query::parse("learning makes", QueryMode::And, false));
        assert_eq!(references(&hits), vec!["/rust", "/go"]);

        // One unknown term empties the whole AND query.
        let hits = search(&index, &Query::parse("learning nothere", QueryMode::And, false));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_or_is_superset_of_and() {
        let index = sample_index();
        for input in ["learning", "learning makes", "rust servers", "zig go small"] {
            let or_hits = search(&index, &Query::parse(input, QueryMode::Or, false));
            let and_hits = search(&index, &Query::parse(input, QueryMode::And, false));
            for hit in &and_hits {
                assert!(
                    or_hits.iter().any(|h| h.reference == hit.reference),
                    "AND hit {} missing under OR for {input:?}",
                    hit.reference
                );
            }
        }
    }

    #[test]
    fn test_prefix_expansion() {
        let index = sample_index();

        // "learn" is not an indexed token, only a prefix of "learning".
        let hits = search(&index, &Query::parse("learn", QueryMode::Or, false));
        assert!(hits.is_empty());

        let hits = search(&index, &Query::parse("learn", QueryMode::Or, true));
        assert_eq!(references(&hits), vec!["/rust", "/go"]);
    }

    #[test]
    fn test_expanded_term_sums_matched_tokens() {
        let index = build_index([doc("/p", "", "sift sifted sifting"), doc("/q", "", "sift")]);

        let hits = search(&index, &Query::parse("sift", QueryMode::Or, true));
        assert_eq!(references(&hits), vec!["/p", "/q"]);
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_empty_query_yields_empty_result() {
        let index = sample_index();
        assert!(search(&index, &Query::parse("", QueryMode::Or, true)).is_empty());
        assert!(search(&index, &Query::parse("  ,, ", QueryMode::Or, true)).is_empty());
    }

    #[test]
    fn test_unknown_token_is_not_an_error() {
        let index = sample_index();
        let hits = search(&index, &Query::parse("nosuchtoken", QueryMode::Or, true));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_scores_sum_term_frequencies_across_fields() {
        let index = build_index([doc("/p", "echo echo", "echo")]);
        let hits = search(&index, &Query::parse("echo", QueryMode::Or, false));
        // 2 in title + 1 in content, equal weighting.
        assert_eq!(hits[0].score, 3.0);
    }

    #[test]
    fn test_title_match_does_not_rank_below_content_match() {
        let index = build_index([
            doc("/content-only", "Other", "keyword"),
            doc("/in-title", "keyword", "other"),
        ]);
        let query = Query::parse("keyword", QueryMode::Or, false);

        // Equal weighting: exact tie, insertion order decides.
        let hits = search(&index, &query);
        assert_eq!(hits[0].score, hits[1].score);
        assert_eq!(references(&hits), vec!["/content-only", "/in-title"]);

        // Boosted weighting: the title match wins outright.
        let hits = search_weighted(&index, &query, &FieldWeights::boosted());
        assert_eq!(hits[0].reference, "/in-title");
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let index = build_index([
            doc("/c", "shared", ""),
            doc("/a", "shared", ""),
            doc("/b", "shared", ""),
        ]);
        let hits = search(&index, &Query::parse("shared", QueryMode::Or, false));
        assert_eq!(references(&hits), vec!["/c", "/a", "/b"]);
    }

    #[test]
    fn test_result_limit() {
        let docs = (0..80).map(|i| {
            // Higher-numbered documents repeat the term more, scoring higher.
            doc(
                &format!("/p{i:02}"),
                "page",
                &"common ".repeat(i + 1),
            )
        });
        let index = build_index(docs);

        let hits = search(&index, &Query::parse("common", QueryMode::Or, false));
        assert_eq!(hits.len(), RESULT_LIMIT);
        assert_eq!(hits[0].reference, "/p79");
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_query_mode_serde_uppercase() {
        assert_eq!(serde_json::to_string(&QueryMode::Or).unwrap(), r#""OR""#);
        assert_eq!(serde_json::from_str::<QueryMode>(r#""AND""#).unwrap(), QueryMode::And);
    }
}
