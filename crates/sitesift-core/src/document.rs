//! Document types ingested by the index builder.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A document supplied by the site build pipeline.
///
/// `reference` is the stable key (typically the page URL path) and must be
/// unique across the collection. Every other field may be absent in the
/// source frontmatter; absent fields deserialize to empty values so a single
/// sparse document never aborts a build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Stable unique reference, typically a URL path.
    pub reference: String,

    /// Page title.
    #[serde(default)]
    pub title: String,

    /// Page description/summary.
    #[serde(default)]
    pub description: String,

    /// Tags; each tag value is indexed as its own token source.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Raw, markup-bearing body content.
    #[serde(default)]
    pub content: String,
}

impl Document {
    /// Create a document with only a reference set.
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the raw content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Validate the document for indexing.
    ///
    /// Only the reference is load-bearing; everything else defaults to
    /// empty. A document that fails validation is skipped by the builder,
    /// never fatal to the build.
    pub fn validate(&self) -> Result<()> {
        if self.reference.is_empty() {
            return Err(CoreError::InvalidDocument(
                "empty reference".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_helpers() {
        let doc = Document::new("/posts/hello")
            .with_title("Hello")
            .with_description("First post")
            .with_tags(["intro", "meta"])
            .with_content("<p>Hello world</p>");

        assert_eq!(doc.reference, "/posts/hello");
        assert_eq!(doc.title, "Hello");
        assert_eq!(doc.tags, vec!["intro", "meta"]);
    }

    #[test]
    fn test_absent_fields_default_to_empty() {
        let doc: Document = serde_json::from_str(r#"{"reference": "/p"}"#).unwrap();
        assert_eq!(doc.reference, "/p");
        assert!(doc.title.is_empty());
        assert!(doc.description.is_empty());
        assert!(doc.tags.is_empty());
        assert!(doc.content.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_reference() {
        assert!(Document::new("").validate().is_err());
        assert!(Document::new("/ok").validate().is_ok());
    }
}
