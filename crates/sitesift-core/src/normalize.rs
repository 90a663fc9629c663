//! Markup stripping and content bounding.
//!
//! Body content arrives as rendered HTML; only its text is indexed, and
//! only a bounded amount of it so index size and build time stay flat as a
//! site grows.

/// Maximum number of characters of body content retained for indexing.
pub const MAX_CONTENT_LEN: usize = 5_000;

/// Strip markup tags from raw content.
///
/// Anything between `<` and `>` is treated as non-content and swallowed;
/// whitespace around tags is preserved as-is with no re-collapsing. A stray
/// `>` outside a tag stays in the output, and an unclosed `<` swallows to
/// the end of input. Malformed input is never rejected.
pub fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;

    for c in raw.chars() {
        if c == '<' {
            in_tag = true;
        } else if c == '>' && in_tag {
            in_tag = false;
        } else if !in_tag {
            out.push(c);
        }
    }

    out
}

/// Strip markup and truncate to [`MAX_CONTENT_LEN`] characters.
///
/// The cut is a hard character cut, not word-aware: splitting mid-word is
/// an accepted cost of keeping the bound cheap and predictable.
pub fn normalize(raw: &str) -> String {
    let mut stripped = strip_markup(raw);

    if let Some((cut, _)) = stripped.char_indices().nth(MAX_CONTENT_LEN) {
        stripped.truncate(cut);
    }

    stripped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        let html = "<p>Hello <strong>world</strong>!</p>";
        let text = strip_markup(html);
        assert_eq!(text, "Hello world!");
    }

    #[test]
    fn test_strip_markup_preserves_whitespace() {
        // Tag boundaries add nothing; surrounding whitespace is untouched.
        assert_eq!(strip_markup("a <em>b</em> c"), "a b c");
        assert_eq!(strip_markup("a<br>b"), "ab");
        assert_eq!(strip_markup("  spaced  <i>out</i>  "), "  spaced  out  ");
    }

    #[test]
    fn test_strip_markup_malformed_input() {
        // Unclosed tag swallows to end of input.
        assert_eq!(strip_markup("before <unclosed and gone"), "before ");
        // A stray '>' outside a tag is ordinary content.
        assert_eq!(strip_markup("a > b"), "a > b");
    }

    #[test]
    fn test_normalize_short_content_unchanged() {
        assert_eq!(normalize("<p>short</p>"), "short");
    }

    #[test]
    fn test_normalize_truncates_at_limit() {
        let long = format!("<div>{}</div>", "x".repeat(MAX_CONTENT_LEN + 500));
        let normalized = normalize(&long);

        assert_eq!(normalized.chars().count(), MAX_CONTENT_LEN);
        assert_eq!(normalized, "x".repeat(MAX_CONTENT_LEN));
    }

    #[test]
    fn test_normalize_cut_is_not_word_aware() {
        let word = "abcdefghij "; // 11 chars, limit is a multiple of 11 minus offset
        let repeated = word.repeat(500); // 5_500 chars
        let normalized = normalize(&repeated);

        assert_eq!(normalized.chars().count(), MAX_CONTENT_LEN);
        // 5_000 % 11 != 0, so the cut lands mid-word.
        assert!(!normalized.ends_with(' '));
    }

    #[test]
    fn test_normalize_multibyte_boundary() {
        let long = "é".repeat(MAX_CONTENT_LEN + 10);
        let normalized = normalize(&long);
        assert_eq!(normalized.chars().count(), MAX_CONTENT_LEN);
    }
}
