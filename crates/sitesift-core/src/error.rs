//! Error types for the Sitesift core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Sitesift.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Document failed ingestion validation.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_document_message() {
        let err = CoreError::InvalidDocument("empty reference".to_string());
        assert!(err.to_string().contains("Invalid document"));
        assert!(err.to_string().contains("empty reference"));
    }
}
