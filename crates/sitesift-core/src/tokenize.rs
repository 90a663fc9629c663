//! The shared tokenization rule.
//!
//! Build and query sides must split terms identically or recall silently
//! degrades, so this module is the single home of the rule: split on any
//! non-alphanumeric character, lowercase, keep every non-empty piece. No
//! stemming, no stopwords, no minimum length.

/// Tokenize text into normalized terms.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let terms = tokenize("Hello, World! This is a test.");
        assert_eq!(terms, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn test_tokenize_punctuation_boundaries() {
        assert_eq!(tokenize("foo-bar_baz"), vec!["foo", "bar", "baz"]);
        assert_eq!(tokenize("/posts/2024/intro"), vec!["posts", "2024", "intro"]);
    }

    #[test]
    fn test_tokenize_keeps_single_characters() {
        // Single-character tokens are indexed; the UI guard handles short
        // input separately.
        assert_eq!(tokenize("a b c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_empty_and_delimiter_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,,  --  ").is_empty());
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("RuSt WASM"), vec!["rust", "wasm"]);
    }
}
