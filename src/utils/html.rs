//! HTML utility functions.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `escape_script_json()` - make JSON safe to embed inside `<script>`
//! - `is_void_element()` - Self-closing elements (meta, link, etc.)

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Make serialized JSON safe to place inside a `<script>` element.
///
/// Script content is raw text, so entities are not decoded there. Instead
/// every `<` becomes the JSON escape `\u003c`, which keeps the document the
/// same JSON value while making `</script>` and `<!--` impossible.
/// `<` only ever appears inside JSON strings, so the rewrite is always valid.
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    if !json.contains('<') {
        return Cow::Borrowed(json);
    }
    Cow::Owned(json.replace('<', "\\u003c"))
}

// =============================================================================
// Element Classification
// =============================================================================

/// Void elements never have a closing tag.
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("hello world"), "hello world");
        assert!(matches!(escape("hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape("Épinal — €€"), "Épinal — €€");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("normal"), "normal");
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
    }

    #[test]
    fn test_escape_script_json() {
        let json = r#"{"description":"</script><b>"}"#;
        let escaped = escape_script_json(json);
        assert!(!escaped.contains("</script>"));

        let back: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(back["description"], "</script><b>");
    }

    #[test]
    fn test_escape_script_json_borrowed() {
        assert!(matches!(escape_script_json(r#"{"a":1}"#), Cow::Borrowed(_)));
    }

    #[test]
    fn test_is_void_element() {
        assert!(is_void_element("meta"));
        assert!(is_void_element("link"));
        assert!(!is_void_element("title"));
        assert!(!is_void_element("script"));
    }
}
