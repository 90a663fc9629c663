//! Sitesift Index Library
//!
//! Builds a serialized, multi-field inverted index from a document
//! collection and evaluates queries against it.
//!
//! # Example
//!
//! ```
//! use sitesift_core::Document;
//! use sitesift_index::{search, IndexBuilder, Query, QueryMode};
//!
//! let mut builder = IndexBuilder::default();
//! builder.add_document(
//!     Document::new("/posts/hello")
//!         .with_title("Hello")
//!         .with_content("<p>Hello world</p>"),
//! );
//! let index = builder.build();
//!
//! let query = Query::parse("hello", QueryMode::Or, true);
//! let hits = search(&index, &query);
//! assert_eq!(hits[0].reference, "/posts/hello");
//! ```

pub mod builder;
pub mod index;
pub mod query;

pub use builder::{build_index, write_index, IndexBuilder};
pub use index::{SearchIndex, StoredDocument, DEFAULT_FIELDS, MAX_INDEX_SIZE};
pub use query::{
    search, search_weighted, FieldWeights, Query, QueryMode, SearchHit, RESULT_LIMIT,
};
use thiserror::Error;

/// Index-related errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, SearchError>;
