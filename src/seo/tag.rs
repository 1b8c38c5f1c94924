//! Head element descriptors.
//!
//! A [`HeadTag`] describes one element of `<head>` without committing to how
//! it gets there. Sinks decide whether to collect, print or patch them.

use std::fmt;

use crate::utils::html::{escape, escape_attr, escape_script_json, is_void_element};

/// Attribute that names a `<meta>` tag.
///
/// Open Graph uses `property`, everything else uses `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Name(String),
    Property(String),
}

impl MetaKey {
    pub fn attr(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Property(_) => "property",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Name(v) | Self::Property(v) => v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta { key: MetaKey, content: String },
    Link { rel: String, href: String },
    /// Script with an inline body (never a `src`).
    Script { mime: String, body: String },
}

impl HeadTag {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title(text.into())
    }

    pub fn meta_name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            key: MetaKey::Name(name.into()),
            content: content.into(),
        }
    }

    pub fn meta_property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Meta {
            key: MetaKey::Property(property.into()),
            content: content.into(),
        }
    }

    pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            rel: rel.into(),
            href: href.into(),
        }
    }

    pub fn script(mime: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Script {
            mime: mime.into(),
            body: body.into(),
        }
    }

    /// Element name.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Meta { .. } => "meta",
            Self::Link { .. } => "link",
            Self::Script { .. } => "script",
        }
    }

    /// Content of a meta tag named `key` (either `name` or `property`).
    pub fn meta_content(&self, key: &str) -> Option<&str> {
        match self {
            Self::Meta { key: k, content } if k.value() == key => Some(content),
            _ => None,
        }
    }

    /// Render as a single line of HTML.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HeadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();

        write!(f, "<{tag}")?;
        match self {
            Self::Title(_) => {}
            Self::Meta { key, content } => write!(
                f,
                r#" {}="{}" content="{}""#,
                key.attr(),
                escape_attr(key.value()),
                escape_attr(content)
            )?,
            Self::Link { rel, href } => write!(
                f,
                r#" rel="{}" href="{}""#,
                escape_attr(rel),
                escape_attr(href)
            )?,
            Self::Script { mime, .. } => write!(f, r#" type="{}""#, escape_attr(mime))?,
        }
        f.write_str(">")?;

        if is_void_element(tag) {
            return Ok(());
        }

        match self {
            Self::Title(text) => f.write_str(&escape(text))?,
            Self::Script { body, .. } => f.write_str(&escape_script_json(body))?,
            _ => {}
        }
        write!(f, "</{tag}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_title() {
        assert_eq!(
            HeadTag::title("Fish & Chips").to_html(),
            "<title>Fish &amp; Chips</title>"
        );
    }

    #[test]
    fn test_render_meta() {
        assert_eq!(
            HeadTag::meta_name("description", "say \"hi\"").to_html(),
            r#"<meta name="description" content="say &quot;hi&quot;">"#
        );
        assert_eq!(
            HeadTag::meta_property("og:type", "website").to_html(),
            r#"<meta property="og:type" content="website">"#
        );
    }

    #[test]
    fn test_render_link() {
        assert_eq!(
            HeadTag::link("canonical", "https://a.test/?x=1&y=2").to_html(),
            r#"<link rel="canonical" href="https://a.test/?x=1&amp;y=2">"#
        );
    }

    #[test]
    fn test_render_script_keeps_json_quotes() {
        let tag = HeadTag::script("application/ld+json", r#"{"a":"</script>"}"#);
        assert_eq!(
            tag.to_html(),
            r#"<script type="application/ld+json">{"a":"\u003c/script>"}</script>"#
        );
    }

    #[test]
    fn test_meta_content_lookup() {
        let tag = HeadTag::meta_property("og:url", "https://a.test");
        assert_eq!(tag.meta_content("og:url"), Some("https://a.test"));
        assert_eq!(tag.meta_content("twitter:url"), None);
        assert_eq!(HeadTag::title("x").meta_content("og:url"), None);
    }
}
