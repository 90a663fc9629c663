//! Index construction from a document collection.
//!
//! Building is a pure transform: documents are staged first, then inverted
//! in a single pass. Queries never mutate the result.

use std::{collections::HashMap, path::Path};

use sitesift_core::{normalize, tokenize, Document};
use tracing::{info, warn};

use crate::{
    index::{Postings, SearchIndex, StoredDocument, DEFAULT_FIELDS},
    Result,
};

/// Builds a [`SearchIndex`] from a document collection.
///
/// Duplicate references follow last-write-wins: the later document wholly
/// replaces the earlier one's stored fields and postings contribution,
/// keeping the earlier insertion position so ranking tie-break order stays
/// stable across re-adds.
#[derive(Debug)]
pub struct IndexBuilder {
    fields: Vec<String>,
    staged: Vec<Document>,
    by_reference: HashMap<String, usize>,
}

impl IndexBuilder {
    /// Create a builder over the given fields.
    ///
    /// The field set is fixed for the lifetime of the index; it cannot be
    /// reconfigured per query.
    pub fn new(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            staged: Vec::new(),
            by_reference: HashMap::new(),
        }
    }

    /// Stage a document for indexing.
    ///
    /// The content field is normalized (markup stripped, then bounded);
    /// title, description, and tags are indexed as given. An invalid
    /// document is skipped with a warning, never fatal to the build.
    pub fn add_document(&mut self, doc: Document) {
        if let Err(e) = doc.validate() {
            warn!(error = %e, "Skipping document");
            return;
        }

        let doc = Document {
            content: normalize(&doc.content),
            ..doc
        };

        match self.by_reference.get(&doc.reference) {
            Some(&pos) => {
                // Last write wins wholly; keep the original position.
                self.staged[pos] = doc;
            }
            None => {
                self.by_reference.insert(doc.reference.clone(), self.staged.len());
                self.staged.push(doc);
            }
        }
    }

    /// Invert the staged documents into a [`SearchIndex`].
    pub fn build(self) -> SearchIndex {
        let mut postings: Postings = HashMap::new();

        for doc in &self.staged {
            for field in &self.fields {
                let tokens = field_tokens(doc, field);
                if tokens.is_empty() {
                    continue;
                }

                let field_postings = postings.entry(field.clone()).or_default();
                for token in tokens {
                    *field_postings
                        .entry(token)
                        .or_default()
                        .entry(doc.reference.clone())
                        .or_insert(0) += 1;
                }
            }
        }

        let documents: Vec<StoredDocument> = self
            .staged
            .iter()
            .map(|doc| StoredDocument {
                reference: doc.reference.clone(),
                title: doc.title.clone(),
                description: doc.description.clone(),
            })
            .collect();

        let index = SearchIndex {
            fields: self.fields,
            postings,
            documents,
        };

        info!(
            documents = index.document_count(),
            terms = index.term_count(),
            "Built search index"
        );

        index
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_FIELDS)
    }
}

/// Extract the tokens a document contributes to one field.
///
/// Tags are a sequence: each tag value is its own token source, not part of
/// one free-text run.
fn field_tokens(doc: &Document, field: &str) -> Vec<String> {
    match field {
        "title" => tokenize(&doc.title),
        "description" => tokenize(&doc.description),
        "tags" => doc.tags.iter().flat_map(|tag| tokenize(tag)).collect(),
        "content" => tokenize(&doc.content),
        _ => Vec::new(),
    }
}

/// Build an index over the standard fields from a document collection.
pub fn build_index(documents: impl IntoIterator<Item = Document>) -> SearchIndex {
    let mut builder = IndexBuilder::default();
    for doc in documents {
        builder.add_document(doc);
    }
    builder.build()
}

/// Build an index and write it to the given path as JSON.
pub fn write_index(
    documents: impl IntoIterator<Item = Document>,
    path: &Path,
) -> Result<()> {
    build_index(documents).write_to_file(path)
}
