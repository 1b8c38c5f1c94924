//! Open Graph and Twitter Card meta tags data.
//!
//! Both card families share the same page fields (url, title, description,
//! image) and differ only in the fixed type tag and the attribute used.

use crate::seo::metadata::ResolvedMetadata;
use crate::seo::tag::HeadTag;

/// Open Graph tags (`property="og:*"`).
pub struct OgTags<'a> {
    pub og_type: &'static str,
    pub url: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a str,
}

impl<'a> OgTags<'a> {
    pub fn from_meta(meta: &'a ResolvedMetadata) -> Self {
        Self {
            og_type: "website",
            url: &meta.url,
            title: &meta.title,
            description: &meta.description,
            image: &meta.image,
        }
    }

    /// `og:type`, `og:url`, `og:title`, `og:description`, `og:image`.
    pub fn into_tags(self) -> [HeadTag; 5] {
        [
            HeadTag::meta_property("og:type", self.og_type),
            HeadTag::meta_property("og:url", self.url),
            HeadTag::meta_property("og:title", self.title),
            HeadTag::meta_property("og:description", self.description),
            HeadTag::meta_property("og:image", self.image),
        ]
    }
}

/// Twitter Card tags (`name="twitter:*"`).
pub struct TwitterTags<'a> {
    pub card: &'static str,
    pub url: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a str,
}

impl<'a> TwitterTags<'a> {
    pub fn from_meta(meta: &'a ResolvedMetadata) -> Self {
        Self {
            card: "summary_large_image",
            url: &meta.url,
            title: &meta.title,
            description: &meta.description,
            image: &meta.image,
        }
    }

    pub fn into_tags(self) -> [HeadTag; 5] {
        [
            HeadTag::meta_name("twitter:card", self.card),
            HeadTag::meta_name("twitter:url", self.url),
            HeadTag::meta_name("twitter:title", self.title),
            HeadTag::meta_name("twitter:description", self.description),
            HeadTag::meta_name("twitter:image", self.image),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::tag::MetaKey;

    fn meta() -> ResolvedMetadata {
        ResolvedMetadata {
            title: "T".into(),
            description: "D".into(),
            keywords: "K".into(),
            image: "https://a.test/i.jpg".into(),
            url: "https://a.test".into(),
        }
    }

    #[test]
    fn test_og_uses_property_attr() {
        let meta = meta();
        let tags = OgTags::from_meta(&meta).into_tags();
        assert!(tags.iter().all(|t| matches!(
            t,
            HeadTag::Meta { key: MetaKey::Property(p), .. } if p.starts_with("og:")
        )));
        assert_eq!(tags[0].meta_content("og:type"), Some("website"));
        assert_eq!(tags[4].meta_content("og:image"), Some("https://a.test/i.jpg"));
    }

    #[test]
    fn test_twitter_uses_name_attr() {
        let meta = meta();
        let tags = TwitterTags::from_meta(&meta).into_tags();
        assert!(tags.iter().all(|t| matches!(
            t,
            HeadTag::Meta { key: MetaKey::Name(n), .. } if n.starts_with("twitter:")
        )));
        assert_eq!(tags[0].meta_content("twitter:card"), Some("summary_large_image"));
        assert_eq!(tags[2].meta_content("twitter:title"), Some("T"));
    }
}
