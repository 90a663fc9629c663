//! Sitesift Core Library
//!
//! Shared building blocks for the index builder and the query engine:
//!
//! - **Document model**: typed ingestion records with defined defaults for
//!   absent frontmatter fields
//! - **Text normalizer**: markup stripping and content bounding
//! - **Tokenizer**: the single tokenization rule applied on both the build
//!   and query sides

pub mod document;
pub mod error;
pub mod normalize;
pub mod tokenize;

pub use document::Document;
pub use error::{CoreError, Result};
pub use normalize::{normalize, strip_markup, MAX_CONTENT_LEN};
pub use tokenize::tokenize;
