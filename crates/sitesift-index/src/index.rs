//! Serialized search index format.
//!
//! A versionless JSON document tree: indexed field names, per-field
//! postings with term frequencies, and a document store holding the fields
//! needed to render a result. The whole index is loaded into memory in the
//! browser and is immutable once built; a changed collection requires a
//! full rebuild.

use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, SearchError};

/// The standard indexed fields, in order.
pub const DEFAULT_FIELDS: [&str; 4] = ["title", "description", "tags", "content"];

/// Maximum recommended size for the serialized index (500KB).
pub const MAX_INDEX_SIZE: usize = 500 * 1024;

/// Postings: field -> token -> document reference -> term frequency.
pub type Postings = HashMap<String, HashMap<String, HashMap<String, u32>>>;

/// Stored fields needed to render one result.
///
/// Content is used for indexing only and is never retained here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Stable unique reference, typically a URL path.
    pub reference: String,

    /// Document title, used as the result link text.
    #[serde(default)]
    pub title: String,

    /// Document description, used as the result secondary line.
    #[serde(default)]
    pub description: String,
}

/// A serialized searchable index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    /// Ordered indexed field names, fixed at build time.
    pub fields: Vec<String>,

    /// Inverted index with per-field term frequencies.
    pub postings: Postings,

    /// Document store in insertion order.
    ///
    /// The order doubles as the stable tie-break order for ranking.
    pub documents: Vec<StoredDocument>,
}

impl SearchIndex {
    /// Create an empty index over the given fields.
    pub fn empty(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            postings: HashMap::new(),
            documents: Vec::new(),
        }
    }

    /// Serialize the index to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Serialize the index to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Deserialize an index from JSON.
    ///
    /// Exact inverse of [`SearchIndex::to_json`]: round-tripping preserves
    /// fields, postings, and the document store structurally.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SearchError::Serialization(e.to_string()))
    }

    /// Write the index to a file as JSON.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        if json.len() > MAX_INDEX_SIZE {
            tracing::warn!(
                size = json.len(),
                max = MAX_INDEX_SIZE,
                "Search index exceeds recommended size"
            );
        }

        fs::write(path, json).map_err(|e| SearchError::Io(e.to_string()))?;
        Ok(())
    }

    /// Look up a stored document by reference.
    pub fn document(&self, reference: &str) -> Option<&StoredDocument> {
        self.documents.iter().find(|d| d.reference == reference)
    }

    /// Number of stored documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of indexed tokens, summed across fields.
    pub fn term_count(&self) -> usize {
        self.postings.values().map(|tokens| tokens.len()).sum()
    }
}
